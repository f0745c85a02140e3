//! Entity file discovery.

use crate::{
    config::ParserConfig,
    errors::{ParserError, ParserResult},
};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};
use walkdir::WalkDir;

/// Walk `root` and return every regular file carrying the entity marker.
///
/// Entries are visited depth-first with siblings sorted by file name, so the
/// result order is stable across runs. Directories excluded by
/// [`ParserConfig::should_exclude_dir`] are pruned; the root itself is
/// always walked. Symbolic links are not followed.
///
/// # Errors
///
/// Returns [`ParserError::IoError`] if the root or any directory below it
/// cannot be read.
#[instrument(skip(config), fields(root = %root.display()))]
pub fn discover_files(root: &Path, config: &ParserConfig) -> ParserResult<Vec<PathBuf>> {
    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            if e.depth() == 0 || !e.file_type().is_dir() {
                return true;
            }
            match e.file_name().to_str() {
                Some(name) => !config.should_exclude_dir(name),
                None => true,
            }
        });

    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            let source = e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("filesystem loop detected"));
            ParserError::io_error(path, source)
        })?;

        if entry.file_type().is_file() && config.is_entity_file(entry.path()) {
            files.push(entry.into_path());
        }
    }

    debug!(count = files.len(), "Discovered entity files");
    Ok(files)
}
