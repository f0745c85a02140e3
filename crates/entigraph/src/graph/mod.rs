//! Core entity model: fields, entities and the ordered entity graph.

mod entity;
mod entity_graph;

pub use entity::{Entity, Field};
pub use entity_graph::EntityGraph;
