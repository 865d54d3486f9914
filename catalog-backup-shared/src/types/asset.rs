//! Asset records and the attributes, relations and tags attached to them.

use serde::{Deserialize, Serialize};

use crate::canonical::Canonical;

/// The flat identity of an asset inside a domain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub domain_id: String,
    pub domain_name: String,
    pub type_id: String,
    pub type_name: String,
}

/// An asset together with its nested attributes, relations and tags, as
/// written to a per-domain file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetRecord {
    #[serde(flatten)]
    pub asset: Asset,
    pub attributes: Vec<Attribute>,
    pub relations: Vec<Relation>,
    pub tags: Vec<Tag>,
}

/// An attribute value, tagged by the sub-collection it came from.
///
/// Serialized as a single field named after the kind, e.g.
/// `"stringValue": "..."` or `"stringValues": ["a", "b"]`. Payloads are kept
/// as the source sent them, so nulls survive and dates are not reinterpreted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AttributeValue {
    #[serde(rename = "stringValue")]
    String(Option<String>),
    #[serde(rename = "numericValue")]
    Numeric(Option<f64>),
    #[serde(rename = "stringValues")]
    MultiString(Option<Vec<String>>),
    /// Usually epoch milliseconds, but any JSON value is carried through.
    #[serde(rename = "dateValue")]
    Date(serde_json::Value),
    #[serde(rename = "booleanValue")]
    Boolean(Option<bool>),
}

/// Hashable mirror of [`AttributeValue`].
///
/// Numbers are compared by bit pattern with `-0.0` folded into `0.0`, which
/// matches how both values print in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttributeValueKey {
    String(Option<String>),
    Numeric(Option<u64>),
    MultiString(Option<Vec<String>>),
    Date(String),
    Boolean(Option<bool>),
}

impl From<&AttributeValue> for AttributeValueKey {
    fn from(value: &AttributeValue) -> Self {
        match value {
            AttributeValue::String(s) => AttributeValueKey::String(s.clone()),
            AttributeValue::Numeric(n) => {
                AttributeValueKey::Numeric(n.map(|n| if n == 0.0 { 0.0 } else { n }).map(f64::to_bits))
            }
            AttributeValue::MultiString(values) => AttributeValueKey::MultiString(values.clone()),
            AttributeValue::Date(value) => AttributeValueKey::Date(value.to_string()),
            AttributeValue::Boolean(b) => AttributeValueKey::Boolean(*b),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    pub asset_id: String,
    pub id: String,
    pub type_id: String,
    pub name: String,
    #[serde(flatten)]
    pub value: AttributeValue,
}

/// A directed relation between two assets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Relation {
    pub relation_id: String,
    pub relation_type: String,
    pub source_id: String,
    pub source_name: Option<String>,
    pub target_id: String,
    pub target_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    pub id: String,
    pub name: String,
}

impl Canonical for Asset {
    type Key = (
        String,
        String,
        Option<String>,
        String,
        String,
        String,
        String,
    );

    fn canonical_key(&self) -> Self::Key {
        (
            self.id.clone(),
            self.name.clone(),
            self.display_name.clone(),
            self.domain_id.clone(),
            self.domain_name.clone(),
            self.type_id.clone(),
            self.type_name.clone(),
        )
    }
}

impl Canonical for Attribute {
    type Key = (String, String, String, String, AttributeValueKey);

    fn canonical_key(&self) -> Self::Key {
        (
            self.asset_id.clone(),
            self.id.clone(),
            self.type_id.clone(),
            self.name.clone(),
            AttributeValueKey::from(&self.value),
        )
    }
}

impl Canonical for Relation {
    type Key = (String, String, String, Option<String>, String, Option<String>);

    fn canonical_key(&self) -> Self::Key {
        (
            self.relation_id.clone(),
            self.relation_type.clone(),
            self.source_id.clone(),
            self.source_name.clone(),
            self.target_id.clone(),
            self.target_name.clone(),
        )
    }
}

impl Canonical for Tag {
    type Key = (String, String);

    fn canonical_key(&self) -> Self::Key {
        (self.id.clone(), self.name.clone())
    }
}
