pub use crate::context::types::Candidate;

use std::path::Path;

use anyhow::Result;
use ignore::{DirEntry, WalkBuilder};
use path_slash::PathBufExt;
use tracing::{debug, warn};

use crate::config::FilterConfig;

/// Walks `root` and returns every file the filters accept, in walk order.
///
/// Pruned directories are cut from the walk before it descends into them, so
/// nothing beneath them is ever listed. Within a directory, entries are
/// visited by file name.
pub fn gather_candidates(
    root: &Path,
    filters: &FilterConfig,
) -> Result<Vec<Candidate>> {
    let prune = filters.clone();
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(move |entry| !is_pruned(entry, &prune))
        .build();

    let mut results = Vec::new();
    for entry_result in walker {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Could not process entry in {:?}: {}", root, e);
                continue;
            }
        };
        if !is_file_like(&entry) {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if !filters.is_included_file(&name) {
            debug!("not packable: {}", entry.path().display());
            continue;
        }
        results.push(Candidate {
            display_path: display_path(root, entry.path()),
            path: entry.path().to_path_buf(),
        });
    }
    Ok(results)
}

/// Renders `path` relative to `root` the way the artifact shows it: `./a/b.c`.
pub fn display_path(
    root: &Path,
    path: &Path,
) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    Path::new(".").join(rel).to_slash_lossy().into_owned()
}

fn is_pruned(
    entry: &DirEntry,
    filters: &FilterConfig,
) -> bool {
    if entry.depth() == 0 {
        return false;
    }
    let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
    if is_dir && filters.is_pruned_dir(&entry.file_name().to_string_lossy()) {
        debug!("pruned directory: {}", entry.path().display());
        return true;
    }
    false
}

// Symlinks are not followed. A link that does not resolve to a directory is
// treated as a file, so a dangling one surfaces as a read error.
fn is_file_like(entry: &DirEntry) -> bool {
    match entry.file_type() {
        Some(ft) if ft.is_file() => true,
        Some(ft) if ft.is_symlink() => !entry.path().is_dir(),
        _ => false,
    }
}
