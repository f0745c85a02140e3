//! Entity and field types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A single named member of an entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Field {
    /// Field name as declared, or synthesized from the type for embedded fields
    pub name: String,

    /// Canonical type string (e.g. `string`, `*User`, `[]Order`)
    #[serde(rename = "type")]
    pub type_expression: String,
}

impl Field {
    /// Create a field from a name and a canonical type string.
    pub fn new(name: impl Into<String>, type_expression: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_expression: type_expression.into(),
        }
    }
}

/// A record-like type declaration discovered in source code.
///
/// `depends_on` is a sorted set: repeated references collapse into one edge
/// and serialization order is lexicographic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Declared type identifier
    pub name: String,

    /// Fields in declaration order
    pub fields: Vec<Field>,

    /// Names of other entities referenced by this entity's fields
    pub depends_on: BTreeSet<String>,
}

impl Entity {
    /// Create an entity with no fields and no dependencies.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            depends_on: BTreeSet::new(),
        }
    }

    /// Append a field, keeping declaration order.
    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Record a dependency edge.
    ///
    /// Empty names and the entity's own name are ignored. Returns `true` when
    /// the edge was not already present.
    pub fn add_dependency(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if name.is_empty() || name == self.name {
            return false;
        }
        self.depends_on.insert(name)
    }

    /// Builder-style variant of [`Entity::add_field`].
    pub fn with_field(mut self, name: impl Into<String>, type_expression: impl Into<String>) -> Self {
        self.add_field(Field::new(name, type_expression));
        self
    }

    /// Builder-style variant of [`Entity::add_dependency`].
    pub fn with_dependency(mut self, name: impl Into<String>) -> Self {
        self.add_dependency(name);
        self
    }

    /// Whether this entity references `name`.
    pub fn depends_on(&self, name: &str) -> bool {
        self.depends_on.contains(name)
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}
