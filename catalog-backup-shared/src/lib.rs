//! # Catalog Backup Shared
//!
//! This crate defines the normalized records written by the catalog backup
//! exporter: communities, domains, assets and the attributes, relations and
//! tags hanging off each asset.

pub mod canonical;
pub mod types;

pub use canonical::Canonical;
pub use types::asset::{Asset, AssetRecord, Attribute, AttributeValue, Relation, Tag};
pub use types::community::Community;
pub use types::domain::Domain;
pub use types::summary::ExportSummary;

/// Build the rename target for a community or domain.
///
/// The result is always `"<name> - <suffix>"`.
pub fn renamed(name: &str, suffix: &str) -> String {
    format!("{} - {}", name, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renamed() {
        assert_eq!(renamed("Finance", "2024"), "Finance - 2024");
        assert_eq!(renamed("", "x"), " - x");
    }
}
