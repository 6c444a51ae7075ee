// ==========================================
// Conso / Retour - API layer error types
// ==========================================
// Responsibility: the few genuinely fallible paths at the operator surface.
// Calculator entry points never error: malformed quantities coerce to 0 and
// unknown ids are no-ops, so the screen stays live.
// ==========================================

use crate::exporter::ExportError;
use thiserror::Error;

/// API layer error type
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("export failed: {0}")]
    Export(#[from] ExportError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias
pub type ApiResult<T> = Result<T, ApiError>;
