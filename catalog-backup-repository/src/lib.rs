//! # Catalog Backup Repository
//!
//! Access to the source metadata catalog. It includes:
//! - [`CatalogFetcher`] trait abstracting the REST and GraphQL calls
//! - [`CatalogClient`] production client speaking HTTP with basic auth
//! - [`MockCatalogClient`] in-memory client for tests and local runs
//! - wire types for every response shape in [`types`]

pub mod client;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod mock;
pub mod types;

pub use client::CatalogClient;
pub use config::CatalogConnection;
pub use errors::CatalogError;
pub use interfaces::CatalogFetcher;
pub use mock::{MockCall, MockCatalogClient};
pub use types::{
    AssetDomainRef, AssetNode, AttributeNode, CommunityEntry, CommunityPage, DomainEntry, IdRef,
    NamedRef, RelationEnd, RelationNode, TagNode,
};
