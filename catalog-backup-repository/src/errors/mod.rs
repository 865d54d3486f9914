//! Error types for remote catalog access.

mod catalog_error;

pub use catalog_error::CatalogError;
