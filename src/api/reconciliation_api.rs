// ==========================================
// Conso / Retour - reconciliation API
// ==========================================
// Responsibility: operator surface over one PoSession; recomputes the full
// derived view on every read and hands snapshots to the exporter
// Hard rule: the session stays owned by the caller; this API never keeps
// hidden copies of it
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::ReconConfig;
use crate::domain::material::{DerivedRow, PoHeader, PoSession, Totals};
use crate::domain::types::{DeltaBadge, ExportFormat, QuickSetMode};
use crate::engine::ReconciliationCore;
use crate::exporter::{resolve_export_dir, ExportArtifact};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ==========================================
// RowView - one table row ready for display
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowView {
    #[serde(flatten)]
    pub derived: DerivedRow,
    pub badge: DeltaBadge, // delta badge under the configured tolerance
}

// ==========================================
// PoView - full screen payload
// ==========================================
// Ephemeral projection: rebuilt on every read, never the source of truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoView {
    pub header: PoHeader,
    pub rows: Vec<RowView>,
    pub totals: Totals,
}

// ==========================================
// ReconciliationApi
// ==========================================
pub struct ReconciliationApi {
    config: ReconConfig,
}

impl ReconciliationApi {
    pub fn new(config: ReconConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReconConfig {
        &self.config
    }

    /// Rebuild the full screen payload from the session's records.
    pub fn view(&self, session: &PoSession) -> PoView {
        let (rows, totals) = ReconciliationCore::derive_all(&session.records);
        let tolerance = self.config.delta_tolerance_percent;

        let rows = rows
            .into_iter()
            .map(|derived| {
                let badge = DeltaBadge::classify(derived.delta_percent, tolerance);
                RowView { derived, badge }
            })
            .collect();

        PoView {
            header: session.header.clone(),
            rows,
            totals,
        }
    }

    /// Apply a retour edit from the input field.
    ///
    /// Never errors: non-numeric or negative text coerces to 0, an unknown id
    /// leaves the session untouched.
    pub fn set_retour(&self, session: &mut PoSession, id: &str, raw: &str) {
        tracing::debug!(material_id = id, raw, "retour edit");

        session.records = ReconciliationCore::set_retour_raw(&session.records, id, raw);
        session.touch();
    }

    /// Apply a retour shortcut.
    ///
    /// An unknown mode token or unknown id is a no-op (logged, not surfaced).
    pub fn quick_set(&self, session: &mut PoSession, id: &str, mode_token: &str) {
        let Some(mode) = QuickSetMode::parse(mode_token) else {
            tracing::warn!(material_id = id, mode_token, "unknown quick-set mode, ignoring");
            return;
        };

        tracing::debug!(material_id = id, mode = %mode, "retour quick-set");

        session.records = ReconciliationCore::quick_set(&session.records, id, mode);
        session.touch();
    }

    /// Render the current derived table as a downloadable artifact.
    pub fn export(&self, session: &PoSession, format: ExportFormat) -> ExportArtifact {
        let (rows, _totals) = ReconciliationCore::derive_all(&session.records);

        tracing::info!(
            po_number = %session.header.po_number,
            format = %format,
            rows = rows.len(),
            "building export artifact"
        );

        ExportArtifact::build(format, &rows)
    }

    /// Render and write the artifact to the configured export directory.
    ///
    /// # Returns
    /// - Ok(path): where the file landed
    /// - Err(ApiError::Export): no usable directory, or the write failed
    pub fn save_export(&self, session: &PoSession, format: ExportFormat) -> ApiResult<PathBuf> {
        let artifact = self.export(session, format);
        let dir = resolve_export_dir(self.config.export_dir.as_deref())?;

        Ok(artifact.save_to_dir(&dir)?)
    }

    /// Parse an export format token coming from the view layer.
    pub fn parse_export_format(token: &str) -> ApiResult<ExportFormat> {
        ExportFormat::parse(token)
            .ok_or_else(|| ApiError::InvalidInput(format!("unknown export format: {token}")))
    }
}
