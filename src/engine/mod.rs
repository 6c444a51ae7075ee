// ==========================================
// Conso / Retour - engine layer
// ==========================================
// Responsibility: business rules as pure functions
// Hard rule: engines never touch the UI or the filesystem
// ==========================================

pub mod reconciliation;

pub use reconciliation::ReconciliationCore;
