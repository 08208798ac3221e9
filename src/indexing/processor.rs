use crate::parsers::{detect_language, is_supported_extension};
use log::{debug, error, trace};
use std::io;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().as_encoded_bytes().starts_with(b".")
}

/// Walks `root_path` in lexical order and calls `visit` for each eligible source file.
///
/// Hidden entries below the root are skipped along with their subtrees. The first
/// traversal or visitor error stops the walk and is returned.
pub fn walk_source_files<F>(
    root_path: &Path,
    extensions: &[&str],
    mut visit: F,
) -> io::Result<usize>
where
    F: FnMut(&Path) -> io::Result<()>,
{
    let walker = WalkDir::new(root_path)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));

    let mut visited = 0;
    for entry in walker {
        let entry = entry.map_err(|e| {
            error!("Failed to walk {:?}: {}", root_path, e);
            io::Error::from(e)
        })?;

        if entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        if !is_supported_extension(path, extensions) {
            trace!("Skipping unsupported file: {:?}", path);
            continue;
        }

        debug!(
            "Processing {} file: {:?}",
            detect_language(path).unwrap_or("unknown"),
            path
        );
        visit(path)?;
        visited += 1;
    }

    Ok(visited)
}
