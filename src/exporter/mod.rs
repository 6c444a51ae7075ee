// ==========================================
// Conso / Retour - export layer
// ==========================================
// Responsibility: canonical CSV / JSON renditions of the derived table,
// plus artifact delivery
// ==========================================

pub mod artifact;
pub mod csv_export;
pub mod json_export;

pub use artifact::{resolve_export_dir, ExportArtifact, ExportError};
pub use csv_export::{to_csv, CSV_HEADERS};
pub use json_export::{to_json, JsonRow};
