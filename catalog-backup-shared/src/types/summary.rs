use serde::{Deserialize, Serialize};

/// Raw totals across every per-domain asset file.
///
/// Nested counts are not deduplicated.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExportSummary {
    pub total_assets: u64,
    pub total_attributes: u64,
    pub total_relations: u64,
    pub total_tags: u64,
}
