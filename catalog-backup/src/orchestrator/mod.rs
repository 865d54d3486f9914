//! Orchestrator module for the catalog export.
//!
//! Runs the phases in order: discovery of communities and domains, asset
//! graph normalization, then the summary.

use std::time::Instant;

use catalog_backup_shared::{Community, Domain, ExportSummary};
use tracing::{error, info, instrument, warn};

use crate::errors::ExportError;
use crate::loader::{FileLoader, COMMUNITIES_FILE, DOMAINS_FILE, SUMMARY_FILE};
use crate::normalizer::{AssetNormalizer, NormalizationReport};
use crate::resolver::DomainResolver;
use crate::summary::summarize_directory;
use crate::walker::{CommunityWalker, Traversal};

/// Configuration for the orchestrator.
#[derive(Debug, Clone, Default)]
pub struct OrchestratorConfig {
    /// Root community names, exported in this order.
    pub root_communities: Vec<String>,
}

/// What a completed run produced.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub communities: usize,
    pub domains: usize,
    pub normalization: NormalizationReport,
    pub summary: ExportSummary,
}

/// Output of the discovery phase.
#[derive(Debug, Default)]
pub struct Discovery {
    pub communities: Vec<Community>,
    pub domains: Vec<Domain>,
}

/// Orchestrator that coordinates the export phases.
///
/// Every remote call is issued one at a time. Remote failures are absorbed
/// by the phase that hit them; local write failures decide whether later
/// phases can run.
pub struct Orchestrator {
    walker: CommunityWalker,
    resolver: DomainResolver,
    normalizer: AssetNormalizer,
    loader: FileLoader,
    config: OrchestratorConfig,
}

impl Orchestrator {
    pub fn new(
        walker: CommunityWalker,
        resolver: DomainResolver,
        normalizer: AssetNormalizer,
        loader: FileLoader,
        config: OrchestratorConfig,
    ) -> Self {
        Self {
            walker,
            resolver,
            normalizer,
            loader,
            config,
        }
    }

    /// Run the full export.
    ///
    /// Fails when the output directory cannot be created, when
    /// `domains.json` cannot be written or read back, when a global
    /// collection cannot be written, or when the summary cannot be built.
    /// Files written before the failure stay on disk.
    #[instrument(skip(self), fields(output_dir = %self.loader.base_dir().display()))]
    pub async fn run(&mut self) -> Result<RunReport, ExportError> {
        let start_time = Instant::now();
        info!("Starting catalog export");

        self.loader.ensure_dir().await?;

        let discovery = self.discover().await;
        info!(
            total_communities = discovery.communities.len(),
            total_domains = discovery.domains.len(),
            "Discovery complete"
        );

        match self
            .loader
            .write_json(COMMUNITIES_FILE, &discovery.communities)
            .await
        {
            Ok(path) => info!(path = %path.display(), "Communities saved"),
            Err(e) => error!(error = %e, "Failed to write communities"),
        }

        let path = self
            .loader
            .write_json(DOMAINS_FILE, &discovery.domains)
            .await
            .inspect_err(|e| error!(error = %e, "Failed to write domains, stopping export"))?;
        info!(path = %path.display(), "Domains saved");

        let domains: Vec<Domain> = self.loader.read_json(DOMAINS_FILE).await?;
        let normalization = self.normalizer.run(&domains, &mut self.loader).await?;

        let summary = summarize_directory(self.loader.base_dir())
            .await
            .inspect_err(|e| error!(error = %e, "Failed to generate summary"))?;
        self.loader.write_json(SUMMARY_FILE, &summary).await?;

        let report = RunReport {
            communities: discovery.communities.len(),
            domains: discovery.domains.len(),
            normalization,
            summary,
        };

        info!(
            elapsed_secs = format!("{:.2}", start_time.elapsed().as_secs_f64()),
            communities = report.communities,
            domains = report.domains,
            domains_written = report.normalization.domains_written,
            domains_failed = report.normalization.domains_failed,
            total_assets = report.summary.total_assets,
            "Catalog export complete"
        );
        Ok(report)
    }

    /// Walk every configured root and collect its communities and domains.
    ///
    /// Roots that cannot be resolved, or that were already reached from an
    /// earlier root, contribute nothing.
    pub async fn discover(&self) -> Discovery {
        let mut traversal = Traversal::new();
        let mut domains = Vec::new();

        for name in &self.config.root_communities {
            let Some(root) = self.walker.resolve_root(name).await else {
                continue;
            };

            if traversal.has_visited(&root.id) {
                warn!(
                    community = %name,
                    community_id = %root.id,
                    "Community already exported in this run, skipping"
                );
                continue;
            }

            domains.extend(self.resolver.resolve(&root.id).await);
            traversal = self.walker.walk(&root, traversal).await;
        }

        Discovery {
            communities: traversal.into_communities(),
            domains,
        }
    }
}
