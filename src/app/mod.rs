// ==========================================
// Conso / Retour - application layer
// ==========================================
// Responsibility: Tauri integration, connecting the front end to the core
// ==========================================

pub mod state;
pub mod tauri_commands;

// Re-exports
pub use state::AppState;

#[cfg(feature = "tauri-app")]
pub use tauri_commands::*;
