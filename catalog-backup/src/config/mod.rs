//! Configuration loading and dependency wiring.

mod dependencies;

pub use dependencies::Dependencies;

use std::env;
use std::path::PathBuf;

use catalog_backup_repository::CatalogConnection;

use crate::BackupError;

/// Default output directory when `BACKUP_OUTPUT_DIR` is not set.
pub const DEFAULT_OUTPUT_DIR: &str = "./backupData";

/// Everything the exporter needs to run.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub connection: CatalogConnection,
    /// Root community names, in the order they are exported.
    pub root_communities: Vec<String>,
    /// Suffix appended to names to build `newName`.
    pub rename_suffix: String,
    pub output_dir: PathBuf,
}

impl ExportConfig {
    /// Load configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `CATALOG_REST_URL`: base REST URL (required)
    /// - `CATALOG_GRAPHQL_URL`: GraphQL endpoint URL (required)
    /// - `CATALOG_USERNAME` / `CATALOG_PASSWORD`: basic-auth credentials (required)
    /// - `CATALOG_COMMUNITIES`: comma-separated root community names (required)
    /// - `RENAME_SUFFIX`: rename suffix (required)
    /// - `BACKUP_OUTPUT_DIR`: output directory (default: ./backupData)
    pub fn from_env() -> Result<Self, BackupError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BackupError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| BackupError::config(format!("{} must be set", key)))
        };

        let connection = CatalogConnection::new(
            required("CATALOG_REST_URL")?,
            required("CATALOG_GRAPHQL_URL")?,
            required("CATALOG_USERNAME")?,
            required("CATALOG_PASSWORD")?,
        );

        let root_communities = parse_community_list(&required("CATALOG_COMMUNITIES")?);
        if root_communities.is_empty() {
            return Err(BackupError::config(
                "CATALOG_COMMUNITIES must name at least one community",
            ));
        }

        let rename_suffix = required("RENAME_SUFFIX")?;
        let output_dir = lookup("BACKUP_OUTPUT_DIR")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string());

        Ok(Self {
            connection,
            root_communities,
            rename_suffix,
            output_dir: PathBuf::from(output_dir),
        })
    }
}

/// Split a comma-separated list of community names, trimming whitespace and
/// dropping empty entries.
pub fn parse_community_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
