//! HTTP implementation of [`crate::CatalogFetcher`].

mod http;
mod query;

pub use http::CatalogClient;
pub use query::domain_assets_query;
