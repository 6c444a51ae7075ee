// ==========================================
// Conso / Retour - application state
// ==========================================
// Responsibility: the single in-memory session shared with the view layer
// Hard rule: exactly one logical writer (the interactive operator); edits are
// serialized through one lock, recomputation runs in full on every read
// ==========================================

use std::sync::Mutex;

use crate::api::ReconciliationApi;
use crate::config::ReconConfig;
use crate::domain::material::PoSession;

/// Application state
///
/// Holds the reconciliation API and the session it operates on.
/// Managed as Tauri global state when the `tauri-app` feature is enabled.
pub struct AppState {
    /// Current close-out session; lives for the lifetime of the window.
    pub session: Mutex<PoSession>,

    /// Reconciliation API (carries the screen/export configuration).
    pub recon_api: ReconciliationApi,
}

impl AppState {
    /// Create application state around an existing session.
    pub fn new(session: PoSession, config: ReconConfig) -> Self {
        tracing::info!(
            po_number = %session.header.po_number,
            lines = session.records.len(),
            "initializing AppState"
        );

        Self {
            session: Mutex::new(session),
            recon_api: ReconciliationApi::new(config),
        }
    }

    /// State seeded with the built-in demo PO (until TXT import lands).
    pub fn with_demo_session(config: ReconConfig) -> Self {
        Self::new(PoSession::demo(), config)
    }
}
