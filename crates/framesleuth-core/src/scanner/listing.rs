/// Directory listing — names of a directory's immediate entries.
///
/// Uses `jwalk` restricted to depth 1 with serial parallelism: a single
/// directory level gains nothing from a thread pool, and the caller may
/// already be running several listings on rayon.
use crate::error::{Result, SourceError};
use compact_str::CompactString;
use std::path::Path;
use tracing::{debug, warn};

/// List entry names (files and subdirectories, hidden ones included).
///
/// Names are returned lossily converted to UTF-8, in no particular order.
pub fn list_directory(path: &Path) -> Result<Vec<CompactString>> {
    if !path.is_dir() {
        return Err(SourceError::InvalidDirectory(path.to_path_buf()));
    }

    // Surface permission errors up front with the io::Error intact; jwalk
    // only reports them as its own error type.
    std::fs::read_dir(path).map_err(|source| SourceError::Listing {
        path: path.to_path_buf(),
        source,
    })?;

    let walker = jwalk::WalkDir::new(path)
        .min_depth(1)
        .max_depth(1)
        .skip_hidden(false)
        .follow_links(false)
        .parallelism(jwalk::Parallelism::Serial);

    let mut names = Vec::new();
    for entry_result in walker {
        let entry = entry_result.map_err(|err| {
            warn!("Listing {} failed: {err}", path.display());
            SourceError::Walk(err.to_string())
        })?;
        let name = entry.file_name().to_string_lossy();
        names.push(CompactString::new(name));
    }

    debug!("Listed {} entries in {}", names.len(), path.display());
    Ok(names)
}
