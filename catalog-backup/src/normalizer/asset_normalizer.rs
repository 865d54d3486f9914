//! Asset graph normalizer implementation.

use std::collections::HashSet;
use std::sync::Arc;

use catalog_backup_repository::{AssetNode, AttributeNode, CatalogFetcher, RelationNode};
use catalog_backup_shared::{
    Asset, AssetRecord, Attribute, AttributeValue, Domain, Relation, Tag,
};
use tracing::{debug, error, info, instrument, warn};

use crate::errors::ExportError;
use crate::loader::{FileLoader, ASSETS_FILE, ATTRIBUTES_FILE, RELATIONS_FILE, TAGS_FILE};
use crate::normalizer::UniqueSet;

/// Deduplicated records across every domain of a run.
///
/// Created empty when normalization starts, only ever grows, and is written
/// out once at the end. Only domains whose file was written contribute.
#[derive(Debug, Default)]
pub struct NormalizedCatalog {
    pub assets: UniqueSet<Asset>,
    pub attributes: UniqueSet<Attribute>,
    pub relations: UniqueSet<Relation>,
    pub tags: UniqueSet<Tag>,
}

impl NormalizedCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold an asset and everything nested under it into the collections.
    pub fn absorb(&mut self, record: &AssetRecord) {
        self.assets.insert(record.asset.clone());
        for attribute in &record.attributes {
            self.attributes.insert(attribute.clone());
        }
        for relation in &record.relations {
            self.relations.insert(relation.clone());
        }
        for tag in &record.tags {
            self.tags.insert(tag.clone());
        }
    }
}

/// Outcome counts of a normalization run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NormalizationReport {
    /// Domains whose file was written.
    pub domains_written: usize,
    /// Domains skipped because their query or file write failed.
    pub domains_failed: usize,
    /// Asset records written across all domain files.
    pub assets_written: usize,
}

/// Fetches asset graphs domain by domain and writes the normalized output.
pub struct AssetNormalizer {
    fetcher: Arc<dyn CatalogFetcher>,
}

impl AssetNormalizer {
    pub fn new(fetcher: Arc<dyn CatalogFetcher>) -> Self {
        Self { fetcher }
    }

    /// Normalize every domain in order, writing one file per domain as soon
    /// as it completes and the four global collections at the end.
    ///
    /// A failed query or domain file write is logged and the domain skipped,
    /// leaving its records out of the global collections too. Only a failed
    /// write of a global collection is returned as an error.
    pub async fn run(
        &self,
        domains: &[Domain],
        loader: &mut FileLoader,
    ) -> Result<NormalizationReport, ExportError> {
        let mut catalog = NormalizedCatalog::new();
        let mut report = NormalizationReport::default();
        let mut processed: HashSet<&str> = HashSet::new();

        info!(domain_count = domains.len(), "Normalizing asset graphs");

        for domain in domains {
            if !processed.insert(domain.id.as_str()) {
                debug!(domain_id = %domain.id, "Domain already normalized in this run");
                continue;
            }

            let Some(records) = self.normalize_domain(domain).await else {
                report.domains_failed += 1;
                continue;
            };

            match loader.write_domain_assets(domain, &records).await {
                Ok(path) => {
                    info!(
                        domain_name = %domain.name,
                        path = %path.display(),
                        total_assets = records.len(),
                        "Domain assets saved"
                    );
                    report.domains_written += 1;
                    report.assets_written += records.len();
                    for record in &records {
                        catalog.absorb(record);
                    }
                }
                Err(e) => {
                    error!(domain_id = %domain.id, error = %e, "Failed to write domain assets");
                    report.domains_failed += 1;
                }
            }
        }

        loader.write_json(ASSETS_FILE, catalog.assets.items()).await?;
        loader
            .write_json(ATTRIBUTES_FILE, catalog.attributes.items())
            .await?;
        loader
            .write_json(RELATIONS_FILE, catalog.relations.items())
            .await?;
        loader.write_json(TAGS_FILE, catalog.tags.items()).await?;

        info!(
            unique_assets = catalog.assets.items().len(),
            unique_attributes = catalog.attributes.items().len(),
            unique_relations = catalog.relations.items().len(),
            unique_tags = catalog.tags.items().len(),
            "Wrote deduplicated collections"
        );

        Ok(report)
    }

    /// Fetch and flatten one domain.
    ///
    /// Returns `None` when the graph query fails.
    #[instrument(skip(self, domain), fields(domain_id = %domain.id, domain_name = %domain.name))]
    pub async fn normalize_domain(&self, domain: &Domain) -> Option<Vec<AssetRecord>> {
        let nodes = match self.fetcher.fetch_domain_assets(&domain.id).await {
            Ok(nodes) => nodes,
            Err(e) => {
                error!(error = %e, "Graph query failed, skipping domain");
                return None;
            }
        };

        let records: Vec<AssetRecord> = nodes.into_iter().map(normalize_asset).collect();
        for record in &records {
            if record.asset.domain_id != domain.id {
                warn!(
                    asset_id = %record.asset.id,
                    asset_domain_id = %record.asset.domain_id,
                    "Asset reports a different domain than the one queried"
                );
            }
        }

        debug!(asset_count = records.len(), "Normalized domain");
        Some(records)
    }
}

/// Flatten one asset node into its record.
///
/// Attributes keep the order string, numeric, multi-value, date, boolean;
/// outgoing relations come before incoming ones.
pub fn normalize_asset(node: AssetNode) -> AssetRecord {
    let asset_id = node.id.clone();

    let mut attributes = Vec::new();
    extend_attributes(&mut attributes, &asset_id, node.string_attributes, AttributeValue::String);
    extend_attributes(&mut attributes, &asset_id, node.numeric_attributes, AttributeValue::Numeric);
    extend_attributes(
        &mut attributes,
        &asset_id,
        node.multi_value_attributes,
        AttributeValue::MultiString,
    );
    extend_attributes(&mut attributes, &asset_id, node.date_attributes, AttributeValue::Date);
    extend_attributes(&mut attributes, &asset_id, node.boolean_attributes, AttributeValue::Boolean);

    let relations = node
        .outgoing_relations
        .into_iter()
        .chain(node.incoming_relations)
        .map(to_relation)
        .collect();

    let tags = node
        .tags
        .into_iter()
        .map(|tag| Tag {
            id: tag.id,
            name: tag.name,
        })
        .collect();

    AssetRecord {
        asset: Asset {
            id: node.id,
            name: node.name,
            display_name: node.display_name,
            domain_id: node.domain.id,
            domain_name: node.domain.name,
            type_id: node.asset_type.id,
            type_name: node.asset_type.name,
        },
        attributes,
        relations,
        tags,
    }
}

fn extend_attributes<V>(
    out: &mut Vec<Attribute>,
    asset_id: &str,
    nodes: Vec<AttributeNode<V>>,
    wrap: fn(V) -> AttributeValue,
) {
    out.extend(nodes.into_iter().map(|node| Attribute {
        asset_id: asset_id.to_string(),
        id: node.id,
        type_id: node.attribute_type.id,
        name: node.attribute_type.name,
        value: wrap(node.value),
    }));
}

fn to_relation(node: RelationNode) -> Relation {
    Relation {
        relation_id: node.id,
        relation_type: node.relation_type.id,
        source_id: node.source.id,
        source_name: node.source.full_name,
        target_id: node.target.id,
        target_name: node.target.full_name,
    }
}
