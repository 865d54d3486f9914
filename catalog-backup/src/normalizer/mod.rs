//! Asset graph normalizer.
//!
//! Flattens each domain's asset graph into per-domain records and folds every
//! record into deduplicated global collections.

mod asset_normalizer;
mod unique_set;

pub use asset_normalizer::{
    normalize_asset, AssetNormalizer, NormalizationReport, NormalizedCatalog,
};
pub use unique_set::UniqueSet;
