//! Error types for the catalog backup pipeline.

use std::path::PathBuf;

use catalog_backup_repository::CatalogError;
use thiserror::Error;

/// Errors that can stop a pipeline phase.
///
/// Remote failures are normally absorbed by the phase that hit them; only
/// local persistence problems and unreadable state reach the orchestrator.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Reading or writing a file or directory failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A persisted file could not be encoded or decoded.
    #[error("Serialization error at {path}: {source}")]
    Serialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Remote catalog error.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

impl ExportError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn serialization(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Serialization {
            path: path.into(),
            source,
        }
    }
}
