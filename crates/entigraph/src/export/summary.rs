//! Human-readable terminal summary of the entity graph.

use crate::EntityGraph;
use std::io::{self, Write};

/// Write the summary to `w`.
///
/// Prints `no entities found` for an empty graph; otherwise one block per
/// entity with its fields and, when present, its dependencies.
pub fn write_summary<W: Write>(w: &mut W, graph: &EntityGraph) -> io::Result<()> {
    if graph.is_empty() {
        writeln!(w, "no entities found")?;
        return Ok(());
    }

    for entity in graph {
        writeln!(w, "Entity: {} (fields: {})", entity.name, entity.fields.len())?;
        for field in &entity.fields {
            writeln!(w, "  - {} {}", field.name, field.type_expression)?;
        }
        if !entity.depends_on.is_empty() {
            let deps: Vec<&str> = entity.depends_on.iter().map(String::as_str).collect();
            writeln!(w, "  depends on: {}", deps.join(", "))?;
        }
        writeln!(w)?;
    }
    Ok(())
}

/// Render the summary into a string.
pub fn render_summary(graph: &EntityGraph) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_summary(&mut buf, graph);
    String::from_utf8_lossy(&buf).into_owned()
}
