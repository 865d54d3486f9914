//! Wire types for the catalog's REST and GraphQL responses.
//!
//! Only the fields the exporter reads are modelled; everything else in the
//! payload is ignored.

use serde::{Deserialize, Serialize};

/// An `{id, name}` reference to another catalog resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NamedRef {
    pub id: String,
    pub name: String,
}

impl NamedRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A community as returned by the community list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommunityEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub parent: Option<NamedRef>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Response of `GET communities`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommunityPage {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub results: Vec<CommunityEntry>,
}

impl CommunityPage {
    pub fn new(results: Vec<CommunityEntry>) -> Self {
        Self {
            total: Some(results.len() as u64),
            results,
        }
    }

    /// True when the page reports no communities.
    pub fn is_empty(&self) -> bool {
        self.total == Some(0) || self.results.is_empty()
    }
}

/// A domain as returned by `GET domains`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DomainEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub domain_type: NamedRef,
    pub community: NamedRef,
}

/// Response of `GET domains`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DomainPage {
    #[serde(default)]
    pub results: Vec<DomainEntry>,
}

/// The domain an asset lives in, with the owning community.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssetDomainRef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub parent: Option<NamedRef>,
}

/// One entry of an attribute sub-collection.
///
/// The value arrives under a kind-specific field name; which sub-collection
/// the node was read from decides how it is interpreted. A missing value
/// field reads as the empty value (`None` or JSON `null`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttributeNode<V> {
    pub id: String,
    #[serde(rename = "type")]
    pub attribute_type: NamedRef,
    #[serde(
        default,
        alias = "stringValue",
        alias = "numericValue",
        alias = "stringValues",
        alias = "dateValue",
        alias = "booleanValue"
    )]
    pub value: V,
}

impl<V> AttributeNode<V> {
    pub fn new(id: impl Into<String>, attribute_type: NamedRef, value: impl Into<V>) -> Self {
        Self {
            id: id.into(),
            attribute_type,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdRef {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RelationEnd {
    pub id: String,
    #[serde(default)]
    pub full_name: Option<String>,
}

/// An incoming or outgoing relation of an asset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RelationNode {
    pub id: String,
    #[serde(rename = "type")]
    pub relation_type: IdRef,
    pub source: RelationEnd,
    pub target: RelationEnd,
}

impl RelationNode {
    pub fn new(
        id: impl Into<String>,
        relation_type: impl Into<String>,
        source: (&str, &str),
        target: (&str, &str),
    ) -> Self {
        Self {
            id: id.into(),
            relation_type: IdRef {
                id: relation_type.into(),
            },
            source: RelationEnd {
                id: source.0.to_string(),
                full_name: Some(source.1.to_string()),
            },
            target: RelationEnd {
                id: target.0.to_string(),
                full_name: Some(target.1.to_string()),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagNode {
    pub id: String,
    pub name: String,
}

/// One asset of the `assets` GraphQL query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssetNode {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(rename = "type")]
    pub asset_type: NamedRef,
    pub domain: AssetDomainRef,
    #[serde(default)]
    pub string_attributes: Vec<AttributeNode<Option<String>>>,
    #[serde(default)]
    pub numeric_attributes: Vec<AttributeNode<Option<f64>>>,
    #[serde(default)]
    pub multi_value_attributes: Vec<AttributeNode<Option<Vec<String>>>>,
    #[serde(default)]
    pub date_attributes: Vec<AttributeNode<serde_json::Value>>,
    #[serde(default)]
    pub boolean_attributes: Vec<AttributeNode<Option<bool>>>,
    #[serde(default)]
    pub outgoing_relations: Vec<RelationNode>,
    #[serde(default)]
    pub incoming_relations: Vec<RelationNode>,
    #[serde(default)]
    pub tags: Vec<TagNode>,
}

impl AssetNode {
    /// Create an asset with empty sub-collections.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        asset_type: NamedRef,
        domain: AssetDomainRef,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            display_name: None,
            asset_type,
            domain,
            string_attributes: Vec::new(),
            numeric_attributes: Vec::new(),
            multi_value_attributes: Vec::new(),
            date_attributes: Vec::new(),
            boolean_attributes: Vec::new(),
            outgoing_relations: Vec::new(),
            incoming_relations: Vec::new(),
            tags: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_community_page() {
        let json = r#"{
            "total": 1,
            "offset": 0,
            "results": [{
                "id": "c-2",
                "name": "Finance/EU",
                "parent": {"id": "c-1", "name": "Finance", "resourceType": "Community"},
                "createdBy": "someone"
            }]
        }"#;

        let page: CommunityPage = serde_json::from_str(json).unwrap();
        assert!(!page.is_empty());
        assert_eq!(page.results[0].parent, Some(NamedRef::new("c-1", "Finance")));
        assert!(page.results[0].description.is_none());
    }

    #[test]
    fn test_empty_community_page() {
        let page: CommunityPage = serde_json::from_str(r#"{"total": 0, "results": []}"#).unwrap();
        assert!(page.is_empty());

        let page: CommunityPage = serde_json::from_str(r#"{}"#).unwrap();
        assert!(page.is_empty());
    }

    #[test]
    fn test_parse_domain_entry() {
        let json = r#"{
            "id": "d-1",
            "name": "Ledger",
            "description": "General ledger",
            "type": {"id": "t-1", "name": "Glossary"},
            "community": {"id": "c-1", "name": "Finance"}
        }"#;

        let domain: DomainEntry = serde_json::from_str(json).unwrap();
        assert_eq!(domain.domain_type.name, "Glossary");
        assert_eq!(domain.community.id, "c-1");
        assert_eq!(domain.description.as_deref(), Some("General ledger"));
    }

    #[test]
    fn test_parse_asset_node() {
        let json = r#"{
            "id": "a-1",
            "name": "Revenue",
            "displayName": "Revenue (EUR)",
            "type": {"id": "t-1", "name": "Business Term"},
            "domain": {"id": "d-1", "name": "Ledger", "parent": {"id": "c-1", "name": "Finance"}},
            "stringAttributes": [{"id": "s-1", "type": {"id": "at-1", "name": "Definition"}, "stringValue": "Money in"}],
            "numericAttributes": [{"id": "n-1", "type": {"id": "at-2", "name": "Score"}, "numericValue": 4.5}],
            "multiValueAttributes": [{"id": "m-1", "type": {"id": "at-3", "name": "Regions"}, "stringValues": ["EU", "US"]}],
            "dateAttributes": [{"id": "dt-1", "type": {"id": "at-4", "name": "Reviewed"}, "dateValue": 1700000000000}],
            "booleanAttributes": [{"id": "b-1", "type": {"id": "at-5", "name": "Critical"}, "booleanValue": true}],
            "outgoingRelations": [{
                "id": "r-1",
                "type": {"id": "rt-1"},
                "source": {"id": "a-1", "fullName": "Revenue"},
                "target": {"id": "a-2", "fullName": "Sales"}
            }],
            "incomingRelations": [],
            "tags": [{"id": "tag-1", "name": "kpi"}]
        }"#;

        let asset: AssetNode = serde_json::from_str(json).unwrap();
        assert_eq!(asset.display_name.as_deref(), Some("Revenue (EUR)"));
        assert_eq!(asset.string_attributes[0].value.as_deref(), Some("Money in"));
        assert_eq!(asset.numeric_attributes[0].value, Some(4.5));
        assert_eq!(
            asset.multi_value_attributes[0].value,
            Some(vec!["EU".to_string(), "US".to_string()])
        );
        assert_eq!(asset.date_attributes[0].value, serde_json::json!(1700000000000i64));
        assert_eq!(asset.boolean_attributes[0].value, Some(true));
        assert_eq!(asset.outgoing_relations[0].target.full_name.as_deref(), Some("Sales"));
        assert_eq!(asset.domain.parent, Some(NamedRef::new("c-1", "Finance")));
        assert_eq!(asset.tags.len(), 1);
    }

    #[test]
    fn test_parse_asset_node_with_loose_values() {
        let json = r#"{
            "id": "a-1",
            "name": "Revenue",
            "type": {"id": "t-1", "name": "Business Term"},
            "domain": {"id": "d-1", "name": "Ledger"},
            "stringAttributes": [
                {"id": "s-1", "type": {"id": "at-1", "name": "Definition"}, "stringValue": null},
                {"id": "s-2", "type": {"id": "at-6", "name": "Note"}}
            ],
            "numericAttributes": [{"id": "n-1", "type": {"id": "at-2", "name": "Score"}, "numericValue": null}],
            "dateAttributes": [
                {"id": "dt-1", "type": {"id": "at-4", "name": "Reviewed"}, "dateValue": "2024-01-01T00:00:00Z"},
                {"id": "dt-2", "type": {"id": "at-7", "name": "Retired"}}
            ],
            "booleanAttributes": [{"id": "b-1", "type": {"id": "at-5", "name": "Critical"}, "booleanValue": null}],
            "incomingRelations": [{
                "id": "r-1",
                "type": {"id": "rt-1"},
                "source": {"id": "a-9", "fullName": null},
                "target": {"id": "a-1"}
            }]
        }"#;

        let asset: AssetNode = serde_json::from_str(json).unwrap();
        assert_eq!(asset.string_attributes.len(), 2);
        assert!(asset.string_attributes.iter().all(|a| a.value.is_none()));
        assert_eq!(asset.numeric_attributes[0].value, None);
        assert_eq!(
            asset.date_attributes[0].value,
            serde_json::json!("2024-01-01T00:00:00Z")
        );
        assert!(asset.date_attributes[1].value.is_null());
        assert_eq!(asset.boolean_attributes[0].value, None);
        assert!(asset.incoming_relations[0].source.full_name.is_none());
        assert!(asset.incoming_relations[0].target.full_name.is_none());
    }
}
