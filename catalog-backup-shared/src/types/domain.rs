//! Domain records.

use serde::{Deserialize, Serialize};

/// A domain owned by a community.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    pub id: String,
    pub name: String,
    pub new_name: String,
    pub type_id: String,
    pub type_name: String,
    pub community_id: String,
    pub community_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_field_order() {
        let domain = Domain {
            id: "d-1".to_string(),
            name: "Ledger".to_string(),
            new_name: "Ledger - old".to_string(),
            type_id: "t-1".to_string(),
            type_name: "Glossary".to_string(),
            community_id: "c-1".to_string(),
            community_name: "Finance".to_string(),
            description: None,
        };

        let json = serde_json::to_string(&domain).unwrap();
        assert_eq!(
            json,
            r#"{"id":"d-1","name":"Ledger","newName":"Ledger - old","typeId":"t-1","typeName":"Glossary","communityId":"c-1","communityName":"Finance"}"#
        );

        let back: Domain = serde_json::from_str(&json).unwrap();
        assert_eq!(back, domain);
    }
}
