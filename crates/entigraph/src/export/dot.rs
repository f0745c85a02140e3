//! DOT format export for Graphviz visualization.
//!
//! Generates a dependency diagram: one node per entity name, one edge per
//! `depends_on` entry. Referenced names that are not declared as entities
//! (types from other packages, for instance) get a dashed node.

use crate::EntityGraph;
use std::collections::{BTreeSet, HashSet};
use std::fmt::Write;

/// Options for styling DOT export
#[derive(Debug, Clone)]
pub struct DotOptions {
    /// Graph layout direction: LR, TB, RL, BT
    pub rankdir: String,
    /// Fill color for declared entities (hex color code)
    pub entity_color: String,
    /// Fill color for referenced but undeclared names (hex color code)
    pub external_color: String,
    /// Append the field count to entity labels
    pub show_field_count: bool,
}

impl Default for DotOptions {
    fn default() -> Self {
        DotOptions {
            rankdir: "LR".to_string(),
            entity_color: "#FFE082".to_string(),
            external_color: "#E0E0E0".to_string(),
            show_field_count: false,
        }
    }
}

/// Export graph to Graphviz DOT format
pub fn export_dot(graph: &EntityGraph) -> String {
    export_dot_styled(graph, &DotOptions::default())
}

/// Export graph to Graphviz DOT format with custom styling
pub fn export_dot_styled(graph: &EntityGraph, options: &DotOptions) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "digraph entities {{");
    let _ = writeln!(output, "    rankdir={};", options.rankdir);
    let _ = writeln!(output, "    node [shape=box, style=filled];");
    let _ = writeln!(output);

    // Declared entities first, in graph order; duplicates share one node
    let mut declared = HashSet::new();
    for entity in graph {
        if !declared.insert(entity.name.as_str()) {
            continue;
        }
        let mut label = escape_dot_label(&entity.name);
        if options.show_field_count {
            let _ = write!(label, "\\n{} fields", entity.fields.len());
        }
        let _ = writeln!(
            output,
            "    \"{}\" [label=\"{}\", fillcolor=\"{}\"];",
            escape_dot_label(&entity.name),
            label,
            options.entity_color
        );
    }

    let external: BTreeSet<&str> = graph
        .iter()
        .flat_map(|e| e.depends_on.iter().map(String::as_str))
        .filter(|name| !declared.contains(name))
        .collect();
    for name in external {
        let name = escape_dot_label(name);
        let _ = writeln!(
            output,
            "    \"{name}\" [label=\"{name}\", fillcolor=\"{}\", style=\"filled,dashed\"];",
            options.external_color
        );
    }

    let _ = writeln!(output);

    let mut seen_edges = HashSet::new();
    for entity in graph {
        for dep in &entity.depends_on {
            if !seen_edges.insert((entity.name.as_str(), dep.as_str())) {
                continue;
            }
            let _ = writeln!(
                output,
                "    \"{}\" -> \"{}\";",
                escape_dot_label(&entity.name),
                escape_dot_label(dep)
            );
        }
    }

    output.push_str("}\n");
    output
}

/// Escape special characters for DOT labels
fn escape_dot_label(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Entity;

    #[test]
    fn test_escape_dot_label() {
        assert_eq!(escape_dot_label("hello"), "hello");
        assert_eq!(escape_dot_label("line\\nbreak"), "line\\\\nbreak");
        assert_eq!(escape_dot_label("quote\"here"), "quote\\\"here");
    }

    #[test]
    fn test_export_dot_nodes_and_edges() {
        let graph: EntityGraph = vec![
            Entity::new("User").with_dependency("Order"),
            Entity::new("Order")
                .with_dependency("User")
                .with_dependency("Money"),
        ]
        .into_iter()
        .collect();

        let dot = export_dot(&graph);
        assert!(dot.starts_with("digraph entities {"));
        assert!(dot.contains("rankdir=LR;"));
        assert!(dot.contains("\"User\" [label=\"User\""));
        assert!(dot.contains("\"Money\" [label=\"Money\", fillcolor=\"#E0E0E0\", style=\"filled,dashed\"]"));
        assert!(dot.contains("\"User\" -> \"Order\";"));
        assert!(dot.contains("\"Order\" -> \"Money\";"));
        assert!(dot.contains("\"Order\" -> \"User\";"));
        assert!(dot.ends_with("}\n"));
    }

    #[test]
    fn test_export_dot_styled() {
        let graph: EntityGraph = vec![Entity::new("Tag").with_field("Label", "string")]
            .into_iter()
            .collect();
        let options = DotOptions {
            rankdir: "TB".to_string(),
            show_field_count: true,
            ..Default::default()
        };
        let dot = export_dot_styled(&graph, &options);
        assert!(dot.contains("rankdir=TB;"));
        assert!(dot.contains("label=\"Tag\\n1 fields\""));
    }

    #[test]
    fn test_export_dot_is_deterministic() {
        let graph: EntityGraph = vec![
            Entity::new("A").with_dependency("Z").with_dependency("B"),
            Entity::new("B").with_dependency("Y"),
        ]
        .into_iter()
        .collect();
        assert_eq!(export_dot(&graph), export_dot(&graph));
    }
}
