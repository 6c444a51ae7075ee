// ==========================================
// Conso / Retour - domain layer
// ==========================================
// Scope: entities and shared enums; no business rules live here
// ==========================================

pub mod material;
pub mod types;

// Re-export core entities
pub use material::{DerivedRow, MaterialRecord, PoHeader, PoSession, Totals};
pub use types::{DeltaBadge, ExportFormat, QuickSetMode};
