//! Persisting the entity graph to an output directory.

use crate::export::{export_dot, export_json, render_entity_markdown, sanitize_file_name};
use crate::{EntityGraph, ModelError, Result};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the consolidated JSON document.
pub const ENTITIES_JSON: &str = "entities.json";

/// File name of the optional Graphviz diagram.
pub const ENTITIES_DOT: &str = "entities.dot";

/// Which optional artifacts to write next to `entities.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputOptions {
    /// Also write `entities.dot`
    pub dot: bool,
}

/// Paths written by [`write_entities`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteReport {
    /// Path of `entities.json`, if written
    pub json: Option<PathBuf>,
    /// One Markdown page per entity with a usable file name
    pub markdown: Vec<PathBuf>,
    /// Path of `entities.dot`, if written
    pub dot: Option<PathBuf>,
}

impl WriteReport {
    /// Total number of files written.
    pub fn file_count(&self) -> usize {
        self.markdown.len() + usize::from(self.json.is_some()) + usize::from(self.dot.is_some())
    }
}

/// Write the graph to `out_dir`.
///
/// The directory is created if necessary. An empty graph writes nothing
/// else. Otherwise every document is rendered in memory first, so an
/// encoding failure leaves no partial files behind, and then
/// `entities.json`, one `<sanitized name>.md` per entity and, if requested,
/// `entities.dot` are written.
pub fn write_entities(
    out_dir: &Path,
    graph: &EntityGraph,
    options: &OutputOptions,
) -> Result<WriteReport> {
    fs::create_dir_all(out_dir).map_err(|e| ModelError::write(out_dir, e))?;

    let mut report = WriteReport::default();
    if graph.is_empty() {
        info!("No entities to write; ensured {}", out_dir.display());
        return Ok(report);
    }

    let json = export_json(graph)?;
    let pages: Vec<(PathBuf, String)> = graph
        .iter()
        .filter_map(|entity| match sanitize_file_name(&entity.name) {
            Some(name) => Some((
                out_dir.join(format!("{name}.md")),
                render_entity_markdown(entity),
            )),
            None => {
                warn!("Skipping Markdown page for entity with blank name");
                None
            }
        })
        .collect();
    let dot = options.dot.then(|| export_dot(graph));

    let json_path = out_dir.join(ENTITIES_JSON);
    write_file(&json_path, &json)?;
    report.json = Some(json_path);

    for (path, content) in pages {
        write_file(&path, &content)?;
        report.markdown.push(path);
    }

    if let Some(dot) = dot {
        let dot_path = out_dir.join(ENTITIES_DOT);
        write_file(&dot_path, &dot)?;
        report.dot = Some(dot_path);
    }

    info!(
        "Wrote {} files for {} entities to {}",
        report.file_count(),
        graph.len(),
        out_dir.display()
    );
    Ok(report)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    debug!("Writing {}", path.display());
    fs::write(path, content).map_err(|e| ModelError::write(path, e))
}
