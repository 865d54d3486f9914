//! GraphQL query text for the asset graph of a domain.

/// Selection for one attribute sub-collection.
fn attribute_selection(collection: &str, value_field: &str) -> String {
    format!(
        "    {collection}(limit: -1) {{\n      id\n      type {{\n        id\n        name\n      }}\n      {value_field}\n    }}\n"
    )
}

fn relation_selection(collection: &str) -> String {
    format!(
        "    {collection}(limit: -1) {{\n      id\n      type {{\n        id\n      }}\n      source {{\n        id\n        fullName\n      }}\n      target {{\n        id\n        fullName\n      }}\n    }}\n"
    )
}

/// Build the query returning every asset of `domain_id` with all attribute
/// kinds, both relation directions and tags.
pub fn domain_assets_query(domain_id: &str) -> String {
    let escaped = domain_id.replace('\\', "\\\\").replace('"', "\\\"");

    let mut query = String::new();
    query.push_str("query {\n");
    query.push_str(&format!(
        "  assets(where: {{ domain: {{ id: {{ eq: \"{escaped}\" }} }} }}, limit: -1) {{\n"
    ));
    query.push_str("    id\n    name: fullName\n    displayName\n");
    query.push_str("    type {\n      id\n      name\n    }\n");
    query.push_str("    domain {\n      id\n      name\n      parent {\n        id\n        name\n      }\n    }\n");
    query.push_str(&attribute_selection("stringAttributes", "stringValue"));
    query.push_str(&attribute_selection("numericAttributes", "numericValue"));
    query.push_str(&attribute_selection("multiValueAttributes", "stringValues"));
    query.push_str(&attribute_selection("dateAttributes", "dateValue"));
    query.push_str(&attribute_selection("booleanAttributes", "booleanValue"));
    query.push_str(&relation_selection("outgoingRelations"));
    query.push_str(&relation_selection("incomingRelations"));
    query.push_str("    tags(limit: -1) {\n      id\n      name\n    }\n");
    query.push_str("  }\n}\n");
    query
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_scopes_domain() {
        let query = domain_assets_query("d-42");
        assert!(query.contains(r#"domain: { id: { eq: "d-42" } }"#));
        assert!(query.contains("name: fullName"));
    }

    #[test]
    fn test_query_selects_every_collection() {
        let query = domain_assets_query("d-1");
        for field in [
            "stringAttributes(limit: -1)",
            "numericAttributes(limit: -1)",
            "multiValueAttributes(limit: -1)",
            "dateAttributes(limit: -1)",
            "booleanAttributes(limit: -1)",
            "outgoingRelations(limit: -1)",
            "incomingRelations(limit: -1)",
            "tags(limit: -1)",
            "stringValues",
            "booleanValue",
        ] {
            assert!(query.contains(field), "missing {}", field);
        }
    }

    #[test]
    fn test_query_escapes_quotes() {
        let query = domain_assets_query(r#"d"1"#);
        assert!(query.contains(r#"eq: "d\"1""#));
    }
}
