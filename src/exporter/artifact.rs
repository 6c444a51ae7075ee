// ==========================================
// Conso / Retour - export artifacts
// ==========================================
// Responsibility: bundle a serialized document with its download identity
// (file name + MIME type) and deliver it to disk
// Hard rule: artifact content is exactly the serializer output, no wrapping
// ==========================================

use crate::domain::material::DerivedRow;
use crate::domain::types::ExportFormat;
use crate::exporter::{csv_export, json_export};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

// ==========================================
// ExportError - delivery failures
// ==========================================
// Serialization itself is total; only the disk delivery path can fail.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("no export directory available (no download dir on this system and none configured)")]
    NoExportDir,

    #[error("failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// ==========================================
// ExportArtifact - one downloadable document
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportArtifact {
    pub format: ExportFormat,
    pub content: String,                // exact serializer output
    pub generated_at: DateTime<Utc>,    // audit only, never part of content
}

impl ExportArtifact {
    /// Render the given rows into an artifact of the requested format.
    ///
    /// Reads a snapshot: if the caller mutates records after deriving, the
    /// artifact reflects whichever snapshot it was given.
    pub fn build(format: ExportFormat, rows: &[DerivedRow]) -> Self {
        let content = match format {
            ExportFormat::Csv => csv_export::to_csv(rows),
            ExportFormat::Json => json_export::to_json(rows),
        };

        ExportArtifact {
            format,
            content,
            generated_at: Utc::now(),
        }
    }

    pub fn file_name(&self) -> &'static str {
        self.format.file_name()
    }

    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    /// Write the artifact into `dir` under its canonical file name.
    ///
    /// # Returns
    /// - Ok(path): full path of the written file
    /// - Err(ExportError::WriteFailed): I/O failure, path included
    pub fn save_to_dir(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        let path = dir.join(self.file_name());

        std::fs::write(&path, self.content.as_bytes()).map_err(|source| {
            ExportError::WriteFailed {
                path: path.clone(),
                source,
            }
        })?;

        tracing::info!(
            path = %path.display(),
            bytes = self.content.len(),
            format = %self.format,
            "export artifact written"
        );

        Ok(path)
    }
}

/// Resolve the directory export artifacts land in.
///
/// A configured directory wins; otherwise the user's download directory, to
/// match the browser-download behavior the screen replaces.
pub fn resolve_export_dir(configured: Option<&Path>) -> Result<PathBuf, ExportError> {
    match configured {
        Some(dir) => Ok(dir.to_path_buf()),
        None => dirs::download_dir().ok_or(ExportError::NoExportDir),
    }
}
