//! Dependency initialization and wiring for the exporter.

use std::sync::Arc;

use catalog_backup_repository::{CatalogClient, CatalogFetcher};
use tracing::info;

use crate::config::ExportConfig;
use crate::loader::FileLoader;
use crate::normalizer::AssetNormalizer;
use crate::orchestrator::{Orchestrator, OrchestratorConfig};
use crate::resolver::DomainResolver;
use crate::walker::CommunityWalker;
use crate::BackupError;

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The configured orchestrator ready to run.
    pub orchestrator: Orchestrator,
}

impl Dependencies {
    /// Wire the exporter against the live catalog.
    pub fn new(config: &ExportConfig) -> Result<Self, BackupError> {
        let client = CatalogClient::new(config.connection.clone()).map_err(|e| {
            BackupError::config(format!("Failed to create catalog client: {}", e))
        })?;

        Ok(Self::with_fetcher(config, Arc::new(client)))
    }

    /// Wire the exporter against any fetcher implementation.
    pub fn with_fetcher(config: &ExportConfig, fetcher: Arc<dyn CatalogFetcher>) -> Self {
        info!(
            output_dir = %config.output_dir.display(),
            root_communities = ?config.root_communities,
            rename_suffix = %config.rename_suffix,
            "Initializing dependencies"
        );

        let walker = CommunityWalker::new(fetcher.clone(), &config.rename_suffix);
        let resolver = DomainResolver::new(fetcher.clone(), &config.rename_suffix);
        let normalizer = AssetNormalizer::new(fetcher);
        let loader = FileLoader::new(&config.output_dir);

        let orchestrator = Orchestrator::new(
            walker,
            resolver,
            normalizer,
            loader,
            OrchestratorConfig {
                root_communities: config.root_communities.clone(),
            },
        );

        Self { orchestrator }
    }
}
