// ==========================================
// Conso / Retour - Tauri entry point
// ==========================================

// No console window (Windows)
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use conso_retour::app::AppState;
use conso_retour::config::ReconConfig;

#[cfg(feature = "tauri-app")]
fn main() {
    use conso_retour::app::tauri_commands::*;

    conso_retour::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", conso_retour::APP_NAME);
    tracing::info!("version: {}", conso_retour::VERSION);
    tracing::info!("==================================================");

    // Session seeded in memory until the SAP TXT import is wired in.
    let app_state = AppState::with_demo_session(ReconConfig::default());

    tauri::Builder::default()
        .manage(app_state)
        .invoke_handler(tauri::generate_handler![
            // Screen commands
            get_po_view,
            set_retour,
            quick_set_retour,
            // Export commands
            export_table,
            save_export,
            // Import stub
            import_sap_txt,
        ])
        .run(tauri::generate_context!())
        .expect("failed to start Tauri application");
}

#[cfg(not(feature = "tauri-app"))]
fn main() {
    conso_retour::logging::init();

    // Headless smoke run: derive the demo session and print both artifacts.
    let state = AppState::with_demo_session(ReconConfig::default());
    let session = state.session.lock().expect("session lock");

    let csv = state
        .recon_api
        .export(&session, conso_retour::ExportFormat::Csv);
    let json = state
        .recon_api
        .export(&session, conso_retour::ExportFormat::Json);

    println!("{}", csv.content);
    println!();
    println!("{}", json.content);
}
