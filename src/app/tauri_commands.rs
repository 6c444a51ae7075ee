// ==========================================
// Conso / Retour - Tauri commands
// ==========================================
// Responsibility: command definitions connecting the front end to the API
// layer; payloads cross the bridge as JSON strings
// ==========================================

#![cfg(feature = "tauri-app")]

use crate::api::ApiError;
use crate::app::state::AppState;
use serde::Serialize;

/// Error payload returned to the front end.
#[derive(Debug, Clone, Serialize)]
struct ErrorResponse {
    code: &'static str,
    message: String,
}

/// Flatten an ApiError into the JSON string Tauri hands the front end.
fn map_api_error(err: ApiError) -> String {
    let response = ErrorResponse {
        code: match &err {
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::Export(_) => "EXPORT_FAILED",
            ApiError::Other(_) => "INTERNAL_ERROR",
        },
        message: err.to_string(),
    };

    serde_json::to_string(&response).unwrap_or_else(|_| err.to_string())
}

fn map_lock_error<T>(_: std::sync::PoisonError<T>) -> String {
    "session lock poisoned".to_string()
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("serialization failed: {}", e))
}

// ==========================================
// Screen commands
// ==========================================

/// Full screen payload: header, derived rows with badges, totals.
#[tauri::command(rename_all = "snake_case")]
pub fn get_po_view(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let session = state.session.lock().map_err(map_lock_error)?;
    to_json(&state.recon_api.view(&session))
}

/// Retour edit from the input field; returns the recomputed view.
///
/// Never rejects the edit: garbage input lands as retour = 0.
#[tauri::command(rename_all = "snake_case")]
pub fn set_retour(
    state: tauri::State<'_, AppState>,
    material_id: String,
    raw_value: String,
) -> Result<String, String> {
    let mut session = state.session.lock().map_err(map_lock_error)?;
    state.recon_api.set_retour(&mut session, &material_id, &raw_value);
    to_json(&state.recon_api.view(&session))
}

/// Retour shortcut (zero / half / assigned); returns the recomputed view.
#[tauri::command(rename_all = "snake_case")]
pub fn quick_set_retour(
    state: tauri::State<'_, AppState>,
    material_id: String,
    mode: String,
) -> Result<String, String> {
    let mut session = state.session.lock().map_err(map_lock_error)?;
    state.recon_api.quick_set(&mut session, &material_id, &mode);
    to_json(&state.recon_api.view(&session))
}

// ==========================================
// Export commands
// ==========================================

/// Render the export artifact and return it for a front-end download.
#[tauri::command(rename_all = "snake_case")]
pub fn export_table(
    state: tauri::State<'_, AppState>,
    format: String,
) -> Result<String, String> {
    let format = crate::api::ReconciliationApi::parse_export_format(&format)
        .map_err(map_api_error)?;

    let session = state.session.lock().map_err(map_lock_error)?;
    let artifact = state.recon_api.export(&session, format);

    to_json(&serde_json::json!({
        "file_name": artifact.file_name(),
        "mime_type": artifact.mime_type(),
        "content": artifact.content,
    }))
}

/// Render the export artifact and write it to the export directory.
#[tauri::command(rename_all = "snake_case")]
pub fn save_export(
    state: tauri::State<'_, AppState>,
    format: String,
) -> Result<String, String> {
    let format = crate::api::ReconciliationApi::parse_export_format(&format)
        .map_err(map_api_error)?;

    let session = state.session.lock().map_err(map_lock_error)?;
    let path = state
        .recon_api
        .save_export(&session, format)
        .map_err(map_api_error)?;

    Ok(path.display().to_string())
}

// ==========================================
// Import command (stub)
// ==========================================

/// SAP TXT import entry point.
///
/// Deliberately unimplemented: the session is seeded in memory until the
/// import pipeline lands. The command exists so the front-end file-drop
/// zone has something to call.
#[tauri::command(rename_all = "snake_case")]
pub fn import_sap_txt(_file_path: String) -> Result<String, String> {
    Err(map_api_error(ApiError::InvalidInput(
        "SAP TXT import is not implemented; the session uses the in-memory seed".to_string(),
    )))
}
