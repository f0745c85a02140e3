//! JSON export of the entity graph.
//!
//! The document is a single array of `{name, fields, depends_on}` objects,
//! indented with two spaces and terminated by a newline.

use crate::{EntityGraph, ModelError, Result};

/// Export the graph as a pretty-printed JSON array.
pub fn export_json(graph: &EntityGraph) -> Result<String> {
    let mut json = serde_json::to_string_pretty(graph)
        .map_err(|e| ModelError::encoding("Failed to encode entities as JSON", Some(e)))?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Entity;

    #[test]
    fn test_export_json_layout() {
        let graph: EntityGraph = vec![Entity::new("User")
            .with_field("ID", "int")
            .with_dependency("Order")]
        .into_iter()
        .collect();

        let json = export_json(&graph).unwrap();
        let expected = r#"[
  {
    "name": "User",
    "fields": [
      {
        "name": "ID",
        "type": "int"
      }
    ],
    "depends_on": [
      "Order"
    ]
  }
]
"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_export_json_empty_fields() {
        let graph: EntityGraph = vec![Entity::new("Marker")].into_iter().collect();
        let json = export_json(&graph).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["fields"], serde_json::json!([]));
        assert_eq!(value[0]["depends_on"], serde_json::json!([]));
    }
}
