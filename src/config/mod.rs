// ==========================================
// Conso / Retour - configuration layer
// ==========================================
// Responsibility: screen and export settings with safe defaults
// Scope: in-memory only; the session has no persisted configuration store
// ==========================================

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default delta badge tolerance: green when |delta| <= 2%.
pub const DEFAULT_DELTA_TOLERANCE_PERCENT: f64 = 2.0;

// ==========================================
// ReconConfig - reconciliation screen settings
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconConfig {
    /// Tolerance band for the delta badge, in percent.
    pub delta_tolerance_percent: f64,

    /// Directory export artifacts are written to.
    /// None -> the user's download directory.
    pub export_dir: Option<PathBuf>,
}

impl Default for ReconConfig {
    fn default() -> Self {
        Self {
            delta_tolerance_percent: DEFAULT_DELTA_TOLERANCE_PERCENT,
            export_dir: None,
        }
    }
}
