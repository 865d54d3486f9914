//! # Catalog Backup
//!
//! Exports the community hierarchy of a metadata catalog, the domains of each
//! community and the full asset graph of every domain into JSON files.
//!
//! ## Architecture
//!
//! The exporter runs strictly sequential phases:
//!
//! 1. **Walker**: resolves each configured root community and discovers its
//!    descendants
//! 2. **Resolver**: lists the domains of each root community
//! 3. **Normalizer**: fetches each domain's asset graph and flattens it into
//!    per-domain files plus deduplicated global collections
//! 4. **Summary**: counts what the per-domain files contain
//! 5. **Orchestrator**: sequences the phases and applies the error policy
//!
//! ## Modules
//!
//! - [`config`]: Configuration and dependency initialization
//! - [`walker`]: Community tree walker
//! - [`resolver`]: Domain resolver
//! - [`normalizer`]: Asset graph normalizer
//! - [`loader`]: JSON file persistence
//! - [`summary`]: Summary reducer
//! - [`orchestrator`]: Coordinates the export
//! - [`errors`]: Error types for the pipeline

pub mod config;
pub mod errors;
pub mod loader;
pub mod normalizer;
pub mod orchestrator;
pub mod resolver;
pub mod summary;
pub mod walker;

pub use config::{Dependencies, ExportConfig};
pub use errors::ExportError;

use thiserror::Error;

/// Errors that can occur during exporter initialization or execution.
#[derive(Error, Debug)]
pub enum BackupError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Export error.
    #[error("Export error: {0}")]
    ExportError(#[from] ExportError),
}

impl BackupError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
