//! The ordered entity graph.

use super::entity::Entity;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Ordered collection of entities accumulated across files.
///
/// Insertion order is file discovery order, then declaration order within a
/// file. Entities are not deduplicated by name: two files declaring the same
/// type name both appear. Once appended, entities are only reachable through
/// shared references.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityGraph {
    entities: Vec<Entity>,
}

impl EntityGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single entity.
    pub fn push(&mut self, entity: Entity) {
        trace!("Appending entity {}", entity.name);
        self.entities.push(entity);
    }

    /// Append every entity parsed from one file, keeping their order.
    pub fn extend_from_file(&mut self, entities: Vec<Entity>) {
        debug!("Appending {} entities from one file", entities.len());
        self.entities.extend(entities);
    }

    /// Number of entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the graph holds no entities.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterate entities in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entity> {
        self.entities.iter()
    }

    /// All entities in insertion order.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// First entity declared with `name`.
    pub fn find(&self, name: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.name == name)
    }

    /// Total number of fields across all entities.
    pub fn field_count(&self) -> usize {
        self.entities.iter().map(|e| e.fields.len()).sum()
    }

    /// Total number of dependency edges across all entities.
    pub fn edge_count(&self) -> usize {
        self.entities.iter().map(|e| e.depends_on.len()).sum()
    }

    /// Entity names declared more than once, sorted.
    pub fn duplicate_names(&self) -> Vec<String> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for entity in &self.entities {
            *counts.entry(entity.name.as_str()).or_default() += 1;
        }
        counts
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(name, _)| name.to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl<'a> IntoIterator for &'a EntityGraph {
    type Item = &'a Entity;
    type IntoIter = std::slice::Iter<'a, Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}

impl FromIterator<Entity> for EntityGraph {
    fn from_iter<I: IntoIterator<Item = Entity>>(iter: I) -> Self {
        Self {
            entities: iter.into_iter().collect(),
        }
    }
}
