// ==========================================
// Conso / Retour - domain type definitions
// ==========================================
// Scope: enums shared by the calculator, exporter and app layer
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Quick-set mode (retour shortcuts)
// ==========================================
// Operator shortcuts on each table row: 0, half of assigned, full assigned.
// An unrecognized mode token maps to None so callers can treat it as a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickSetMode {
    Zero,     // retour = 0
    Half,     // retour = round(assigned / 2)
    Assigned, // retour = assigned
}

impl QuickSetMode {
    /// Loose parsing of the mode token sent by the view layer.
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "zero" => Some(QuickSetMode::Zero),
            "half" => Some(QuickSetMode::Half),
            "assigned" => Some(QuickSetMode::Assigned),
            _ => None,
        }
    }
}

impl fmt::Display for QuickSetMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuickSetMode::Zero => write!(f, "zero"),
            QuickSetMode::Half => write!(f, "half"),
            QuickSetMode::Assigned => write!(f, "assigned"),
        }
    }
}

// ==========================================
// Export format
// ==========================================
// The two interchange artifacts handed to downstream ERP ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// Canonical download file name for the artifact.
    pub fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "conso-retour.csv",
            ExportFormat::Json => "conso-retour.json",
        }
    }

    /// MIME type attached when the artifact is handed to the shell for download.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv;charset=utf-8;",
            ExportFormat::Json => "application/json",
        }
    }

    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "json" => Some(ExportFormat::Json),
            _ => None,
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Json => write!(f, "json"),
        }
    }
}

// ==========================================
// Delta badge (display classification)
// ==========================================
// Screen rule: green when |delta| <= tolerance, red otherwise. The threshold
// comes from ReconConfig; the classification itself stays in the core so the
// view never re-derives it from formatted strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeltaBadge {
    WithinTolerance,
    OutOfTolerance,
}

impl DeltaBadge {
    pub fn classify(delta_percent: f64, tolerance_percent: f64) -> Self {
        if delta_percent.abs() <= tolerance_percent {
            DeltaBadge::WithinTolerance
        } else {
            DeltaBadge::OutOfTolerance
        }
    }
}

impl fmt::Display for DeltaBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeltaBadge::WithinTolerance => write!(f, "WITHIN_TOLERANCE"),
            DeltaBadge::OutOfTolerance => write!(f, "OUT_OF_TOLERANCE"),
        }
    }
}
