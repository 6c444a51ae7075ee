// ==========================================
// Conso / Retour - core library
// ==========================================
// Operator reconciliation screen for manufacturing PO close-out: per-line
// retour entry, derived consomme / delta%, aggregate totals, CSV + JSON
// export for ERP ingestion.
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities and types
pub mod domain;

// Engine layer - business rules (pure functions)
pub mod engine;

// Export layer - CSV / JSON interchange documents
pub mod exporter;

// Configuration layer
pub mod config;

// Logging
pub mod logging;

// API layer - operator surface
pub mod api;

// Application layer - Tauri integration
pub mod app;

// ==========================================
// Core type re-exports
// ==========================================

// Domain types
pub use domain::types::{DeltaBadge, ExportFormat, QuickSetMode};

// Domain entities
pub use domain::{DerivedRow, MaterialRecord, PoHeader, PoSession, Totals};

// Engine
pub use engine::ReconciliationCore;

// Exporter
pub use exporter::{ExportArtifact, ExportError};

// API
pub use api::{ApiError, PoView, ReconciliationApi, RowView};

// ==========================================
// Constants
// ==========================================

// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Application name
pub const APP_NAME: &str = "Conso / Retour - Fin de PO";
