// ==========================================
// Conso / Retour - API layer
// ==========================================
// Responsibility: operator-facing surface consumed by the app layer
// ==========================================

pub mod error;
pub mod reconciliation_api;

pub use error::{ApiError, ApiResult};
pub use reconciliation_api::{PoView, ReconciliationApi, RowView};
