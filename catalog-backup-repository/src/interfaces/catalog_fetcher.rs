//! Catalog fetcher trait definition.

use async_trait::async_trait;

use crate::errors::CatalogError;
use crate::types::{AssetNode, CommunityEntry, CommunityPage, DomainEntry};

/// Abstracts the source catalog so the exporter can run against the live
/// HTTP client or an in-memory mock.
///
/// Every call is a single request that returns the full result set; there is
/// no pagination and no retry at this layer.
#[async_trait]
pub trait CatalogFetcher: Send + Sync {
    /// Look up a community by exact name.
    ///
    /// Returns the first match, or `None` when the name is unknown.
    async fn find_community_by_name(
        &self,
        name: &str,
    ) -> Result<Option<CommunityEntry>, CatalogError>;

    /// List the direct children of a community.
    async fn list_child_communities(&self, parent_id: &str)
        -> Result<CommunityPage, CatalogError>;

    /// List every domain of a community, sub-community domains included.
    async fn list_domains(&self, community_id: &str) -> Result<Vec<DomainEntry>, CatalogError>;

    /// Fetch the full asset graph of one domain.
    async fn fetch_domain_assets(&self, domain_id: &str) -> Result<Vec<AssetNode>, CatalogError>;
}
