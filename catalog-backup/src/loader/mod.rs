//! JSON file persistence for the exporter.
//!
//! Every output is written as pretty-printed JSON below one base directory.
//! Writes are awaited before the caller moves on, so a crash leaves only
//! complete files behind.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use catalog_backup_shared::{AssetRecord, Domain};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::errors::ExportError;

pub const COMMUNITIES_FILE: &str = "communities.json";
pub const DOMAINS_FILE: &str = "domains.json";
pub const ASSETS_FILE: &str = "assets.json";
pub const ATTRIBUTES_FILE: &str = "attributes.json";
pub const RELATIONS_FILE: &str = "relations.json";
pub const TAGS_FILE: &str = "tags.json";
pub const SUMMARY_FILE: &str = "summary.json";

/// Prefix shared by all per-domain asset files.
pub const DOMAIN_ASSETS_PREFIX: &str = "assets_";

/// Writes and reads the exporter's JSON files.
pub struct FileLoader {
    base_dir: PathBuf,
    /// Per-domain file names handed out in this run, mapped to the domain id.
    domain_files: HashMap<String, String>,
}

impl FileLoader {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            domain_files: HashMap::new(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn path_of(&self, file_name: &str) -> PathBuf {
        self.base_dir.join(file_name)
    }

    /// Create the base directory and any missing parents.
    pub async fn ensure_dir(&self) -> Result<(), ExportError> {
        tokio::fs::create_dir_all(&self.base_dir)
            .await
            .map_err(|e| ExportError::io(&self.base_dir, e))
    }

    /// Serialize `data` as pretty JSON into `file_name`, replacing any
    /// previous content.
    pub async fn write_json<T>(&self, file_name: &str, data: &T) -> Result<PathBuf, ExportError>
    where
        T: Serialize + ?Sized,
    {
        let path = self.path_of(file_name);
        let bytes =
            serde_json::to_vec_pretty(data).map_err(|e| ExportError::serialization(&path, e))?;
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| ExportError::io(&path, e))?;
        debug!(path = %path.display(), "Wrote file");
        Ok(path)
    }

    pub async fn read_json<T: DeserializeOwned>(&self, file_name: &str) -> Result<T, ExportError> {
        let path = self.path_of(file_name);
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| ExportError::io(&path, e))?;
        serde_json::from_slice(&bytes).map_err(|e| ExportError::serialization(&path, e))
    }

    /// Pick the per-domain file name for `domain`.
    ///
    /// The name is derived from the domain name. When a different domain
    /// already claimed that name in this run, the domain id is appended.
    pub fn domain_file_name(&mut self, domain: &Domain) -> String {
        let stem = sanitize_file_stem(&domain.name);
        let preferred = format!("{}{}.json", DOMAIN_ASSETS_PREFIX, stem);

        let file_name = match self.domain_files.get(&preferred) {
            Some(owner) if owner != &domain.id => {
                let fallback = format!(
                    "{}{}_{}.json",
                    DOMAIN_ASSETS_PREFIX,
                    stem,
                    sanitize_file_stem(&domain.id)
                );
                warn!(
                    domain_id = %domain.id,
                    domain_name = %domain.name,
                    claimed_by = %owner,
                    file_name = %fallback,
                    "Domain file name already used by another domain"
                );
                fallback
            }
            _ => preferred,
        };

        self.domain_files
            .insert(file_name.clone(), domain.id.clone());
        file_name
    }

    /// Write the asset records of one domain to its own file.
    pub async fn write_domain_assets(
        &mut self,
        domain: &Domain,
        records: &[AssetRecord],
    ) -> Result<PathBuf, ExportError> {
        let file_name = self.domain_file_name(domain);
        self.write_json(&file_name, records).await
    }
}

/// Replace characters that cannot appear in a file name on common platforms.
pub fn sanitize_file_stem(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}
