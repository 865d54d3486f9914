//! Domain resolver.
//!
//! Lists the domains of a community, sub-community domains included.

use std::sync::Arc;

use catalog_backup_repository::{CatalogFetcher, DomainEntry};
use catalog_backup_shared::{renamed, Domain};
use tracing::{error, info, instrument};

pub struct DomainResolver {
    fetcher: Arc<dyn CatalogFetcher>,
    suffix: String,
}

impl DomainResolver {
    pub fn new(fetcher: Arc<dyn CatalogFetcher>, suffix: &str) -> Self {
        Self {
            fetcher,
            suffix: suffix.to_string(),
        }
    }

    /// Fetch and map the domains of `community_id`.
    ///
    /// A failed fetch is logged and yields no domains.
    #[instrument(skip(self))]
    pub async fn resolve(&self, community_id: &str) -> Vec<Domain> {
        match self.fetcher.list_domains(community_id).await {
            Ok(entries) => {
                let domains: Vec<Domain> = entries
                    .into_iter()
                    .map(|entry| to_domain(entry, &self.suffix))
                    .collect();
                info!(domain_count = domains.len(), "Resolved domains");
                domains
            }
            Err(e) => {
                error!(error = %e, "Failed to fetch domains for community");
                Vec::new()
            }
        }
    }
}

/// Map a wire domain into its persisted record.
pub fn to_domain(entry: DomainEntry, suffix: &str) -> Domain {
    Domain {
        new_name: renamed(&entry.name, suffix),
        id: entry.id,
        name: entry.name,
        type_id: entry.domain_type.id,
        type_name: entry.domain_type.name,
        community_id: entry.community.id,
        community_name: entry.community.name,
        description: entry.description,
    }
}
