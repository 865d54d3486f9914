//! Mock catalog client for tests and local development.
//!
//! The `MockCatalogClient` serves communities, domains and asset graphs from
//! memory and can be told to fail for specific names or ids.
//!
//! # Example
//!
//! ```ignore
//! use catalog_backup_repository::{CatalogFetcher, CommunityEntry, MockCatalogClient};
//!
//! let client = MockCatalogClient::new();
//! client.register_root(CommunityEntry { id: "c-1".into(), name: "Finance".into(), parent: None, description: None });
//! let found = client.find_community_by_name("Finance").await?;
//! ```

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::errors::CatalogError;
use crate::interfaces::CatalogFetcher;
use crate::types::{AssetNode, CommunityEntry, CommunityPage, DomainEntry};

/// A call received by the mock, recorded in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    FindCommunity(String),
    ListChildren(String),
    ListDomains(String),
    FetchAssets(String),
}

/// Mock catalog client returning pre-registered data.
pub struct MockCatalogClient {
    roots: RwLock<HashMap<String, CommunityEntry>>,
    children: RwLock<HashMap<String, Vec<CommunityEntry>>>,
    domains: RwLock<HashMap<String, Vec<DomainEntry>>>,
    assets: RwLock<HashMap<String, Vec<AssetNode>>>,
    /// Names or ids whose calls fail.
    failing: RwLock<HashSet<String>>,
    calls: RwLock<Vec<MockCall>>,
}

impl MockCatalogClient {
    pub fn new() -> Self {
        Self {
            roots: RwLock::new(HashMap::new()),
            children: RwLock::new(HashMap::new()),
            domains: RwLock::new(HashMap::new()),
            assets: RwLock::new(HashMap::new()),
            failing: RwLock::new(HashSet::new()),
            calls: RwLock::new(Vec::new()),
        }
    }

    /// Register a community that can be found by its exact name.
    pub fn register_root(&self, community: CommunityEntry) {
        self.roots
            .write()
            .unwrap()
            .insert(community.name.clone(), community);
    }

    /// Register the direct children of `parent_id`, in listing order.
    pub fn register_children(&self, parent_id: &str, children: Vec<CommunityEntry>) {
        self.children
            .write()
            .unwrap()
            .insert(parent_id.to_string(), children);
    }

    /// Register the domains returned for `community_id`.
    pub fn register_domains(&self, community_id: &str, domains: Vec<DomainEntry>) {
        self.domains
            .write()
            .unwrap()
            .insert(community_id.to_string(), domains);
    }

    /// Register the asset graph returned for `domain_id`.
    pub fn register_assets(&self, domain_id: &str, assets: Vec<AssetNode>) {
        self.assets
            .write()
            .unwrap()
            .insert(domain_id.to_string(), assets);
    }

    /// Make every call keyed by `key` (a community name or any id) fail.
    pub fn fail_on(&self, key: &str) {
        self.failing.write().unwrap().insert(key.to_string());
    }

    /// Calls received so far.
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.read().unwrap().clone()
    }

    fn record(&self, call: MockCall) {
        self.calls.write().unwrap().push(call);
    }

    fn check(&self, key: &str) -> Result<(), CatalogError> {
        if self.failing.read().unwrap().contains(key) {
            return Err(CatalogError::remote(format!("mock failure for {}", key)));
        }
        Ok(())
    }
}

impl Default for MockCatalogClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogFetcher for MockCatalogClient {
    async fn find_community_by_name(
        &self,
        name: &str,
    ) -> Result<Option<CommunityEntry>, CatalogError> {
        self.record(MockCall::FindCommunity(name.to_string()));
        self.check(name)?;
        Ok(self.roots.read().unwrap().get(name).cloned())
    }

    async fn list_child_communities(
        &self,
        parent_id: &str,
    ) -> Result<CommunityPage, CatalogError> {
        self.record(MockCall::ListChildren(parent_id.to_string()));
        self.check(parent_id)?;
        let children = self
            .children
            .read()
            .unwrap()
            .get(parent_id)
            .cloned()
            .unwrap_or_default();
        Ok(CommunityPage::new(children))
    }

    async fn list_domains(&self, community_id: &str) -> Result<Vec<DomainEntry>, CatalogError> {
        self.record(MockCall::ListDomains(community_id.to_string()));
        self.check(community_id)?;
        Ok(self
            .domains
            .read()
            .unwrap()
            .get(community_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn fetch_domain_assets(&self, domain_id: &str) -> Result<Vec<AssetNode>, CatalogError> {
        self.record(MockCall::FetchAssets(domain_id.to_string()));
        self.check(domain_id)?;
        self.assets
            .read()
            .unwrap()
            .get(domain_id)
            .cloned()
            .ok_or_else(|| CatalogError::not_found(format!("no assets registered for {}", domain_id)))
    }
}
