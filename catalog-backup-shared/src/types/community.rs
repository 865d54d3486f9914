//! Community records.

use serde::{Deserialize, Serialize};

/// A community discovered while walking the hierarchy.
///
/// Root communities carry no parent fields; every descendant does.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Community {
    pub id: String,
    pub name: String,
    pub new_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Community {
    /// Create a root community record.
    pub fn root(id: String, name: String, suffix: &str, description: Option<String>) -> Self {
        Self {
            new_name: crate::renamed(&name, suffix),
            id,
            name,
            parent_id: None,
            parent_name: None,
            description,
        }
    }

    /// Create a child community record linked to its parent.
    pub fn child(
        id: String,
        name: String,
        suffix: &str,
        parent_id: String,
        parent_name: String,
        description: Option<String>,
    ) -> Self {
        Self {
            new_name: crate::renamed(&name, suffix),
            id,
            name,
            parent_id: Some(parent_id),
            parent_name: Some(parent_name),
            description,
        }
    }
}
