//! Markdown export: one page per entity.

use crate::Entity;
use std::fmt::Write;

/// Render the Markdown page for one entity.
pub fn render_entity_markdown(entity: &Entity) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {}", entity.name);
    let _ = writeln!(out);

    if entity.fields.is_empty() {
        let _ = writeln!(out, "_no fields_");
    } else {
        let _ = writeln!(out, "## Fields");
        for field in &entity.fields {
            let _ = writeln!(out, "- `{}` — {}", field.name, field.type_expression);
        }
        let _ = writeln!(out);
    }

    if !entity.depends_on.is_empty() {
        let deps: Vec<&str> = entity.depends_on.iter().map(String::as_str).collect();
        let _ = writeln!(out, "## Depends on");
        let _ = writeln!(out, "{}", deps.join(", "));
    }

    out
}

/// Filesystem-friendly base name for an entity page.
///
/// The name is trimmed and lowercased; every character outside
/// `[a-z0-9._-]` becomes `_`. Returns `None` for blank names. Distinct
/// entity names may map to the same file name; collisions are not resolved.
pub fn sanitize_file_name(name: &str) -> Option<String> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    let sanitized = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    Some(sanitized)
}
