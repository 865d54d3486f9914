//! Summary reducer.
//!
//! Counts the assets and the raw nested attribute, relation and tag entries
//! across every per-domain asset file in a directory.

use std::path::Path;

use catalog_backup_shared::ExportSummary;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};
use tracing::{debug, info};

use crate::errors::ExportError;
use crate::loader::DOMAIN_ASSETS_PREFIX;

/// The parts of a per-domain asset entry the summary looks at.
#[derive(Debug, Default, Deserialize)]
pub struct SummaryEntry {
    /// `Some` whenever the key is present, even with a `null` value.
    #[serde(default, deserialize_with = "present")]
    pub id: Option<IgnoredAny>,
    #[serde(default)]
    pub attributes: Option<Vec<IgnoredAny>>,
    #[serde(default)]
    pub relations: Option<Vec<IgnoredAny>>,
    #[serde(default)]
    pub tags: Option<Vec<IgnoredAny>>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<IgnoredAny>, D::Error>
where
    D: Deserializer<'de>,
{
    IgnoredAny::deserialize(deserializer).map(Some)
}

/// Add the counts of `entries` to `summary`.
///
/// Entries without an `id` key are not counted as assets; missing or null
/// nested arrays count as empty.
pub fn accumulate(summary: &mut ExportSummary, entries: &[SummaryEntry]) {
    for entry in entries {
        if entry.id.is_some() {
            summary.total_assets += 1;
        }
        summary.total_attributes += entry.attributes.as_ref().map_or(0, Vec::len) as u64;
        summary.total_relations += entry.relations.as_ref().map_or(0, Vec::len) as u64;
        summary.total_tags += entry.tags.as_ref().map_or(0, Vec::len) as u64;
    }
}

/// True for per-domain asset file names such as `assets_Ledger.json`.
pub fn is_domain_assets_file(file_name: &str) -> bool {
    file_name.starts_with(DOMAIN_ASSETS_PREFIX) && file_name.ends_with(".json")
}

/// Summarize every per-domain asset file in `dir`.
///
/// Files are read in file-name order. Any unreadable or unparsable file fails
/// the whole summary.
pub async fn summarize_directory(dir: &Path) -> Result<ExportSummary, ExportError> {
    let mut reader = tokio::fs::read_dir(dir)
        .await
        .map_err(|e| ExportError::io(dir, e))?;

    let mut files = Vec::new();
    while let Some(entry) = reader
        .next_entry()
        .await
        .map_err(|e| ExportError::io(dir, e))?
    {
        if let Some(name) = entry.file_name().to_str() {
            if is_domain_assets_file(name) {
                files.push(entry.path());
            }
        }
    }
    files.sort();

    let mut summary = ExportSummary::default();
    for path in &files {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ExportError::io(path, e))?;
        let entries: Vec<SummaryEntry> =
            serde_json::from_slice(&bytes).map_err(|e| ExportError::serialization(path, e))?;
        debug!(path = %path.display(), entries = entries.len(), "Summarized file");
        accumulate(&mut summary, &entries);
    }

    info!(
        files = files.len(),
        total_assets = summary.total_assets,
        total_attributes = summary.total_attributes,
        total_relations = summary.total_relations,
        total_tags = summary.total_tags,
        "Summary generated"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_domain_assets_file() {
        assert!(is_domain_assets_file("assets_Ledger.json"));
        assert!(!is_domain_assets_file("assets.json"));
        assert!(!is_domain_assets_file("attributes.json"));
        assert!(!is_domain_assets_file("assets_Ledger.json.bak"));
    }

    #[test]
    fn test_accumulate_counts_raw_entries() {
        let entries: Vec<SummaryEntry> = serde_json::from_str(
            r#"[
                {"id": "a-1", "attributes": [{}, {}], "relations": [{}], "tags": []},
                {"id": "a-2", "attributes": [{}], "relations": [{}], "tags": [{}]},
                {"id": null, "attributes": null},
                {"name": "no id", "attributes": [{}]}
            ]"#,
        )
        .unwrap();

        let mut summary = ExportSummary::default();
        accumulate(&mut summary, &entries);

        assert_eq!(summary.total_assets, 3);
        assert_eq!(summary.total_attributes, 4);
        assert_eq!(summary.total_relations, 2);
        assert_eq!(summary.total_tags, 1);
    }

    #[tokio::test]
    async fn test_summarize_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("assets_One.json"),
            r#"[{"id": "a-1", "attributes": [{}], "relations": [], "tags": [{}]}]"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join("assets_Two.json"),
            r#"[{"id": "a-1", "attributes": [{}], "relations": [{}], "tags": [{}]}]"#,
        )
        .unwrap();
        std::fs::write(dir.path().join("assets.json"), "not even json").unwrap();

        let summary = summarize_directory(dir.path()).await.unwrap();

        assert_eq!(
            summary,
            ExportSummary {
                total_assets: 2,
                total_attributes: 2,
                total_relations: 1,
                total_tags: 2,
            }
        );
    }

    #[tokio::test]
    async fn test_unparsable_file_fails_summary() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("assets_One.json"), r#"[{"id": "a-1"}]"#).unwrap();
        std::fs::write(dir.path().join("assets_Broken.json"), "{").unwrap();

        let result = summarize_directory(dir.path()).await;
        assert!(matches!(result, Err(ExportError::Serialization { .. })));
    }
}
