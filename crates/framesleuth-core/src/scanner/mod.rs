/// Scanner module — turns a source into sequences.
///
/// A [`Source`] is either a directory whose entry names are listed, or a
/// literal list of names. Resolution happens completely before grouping
/// starts, so a bad source fails without producing partial results.
///
/// Independent sources can be processed in parallel with
/// [`get_sequences_many`]; a single grouping pass is always sequential.
pub mod listing;

use crate::analysis::{group, DetectOptions};
use crate::error::Result;
use crate::model::Sequence;
use compact_str::CompactString;
use rayon::prelude::*;
use std::path::PathBuf;
use tracing::{debug, error};

/// Where the filenames come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Immediate entries of a directory.
    Directory(PathBuf),
    /// Names supplied by the caller.
    List(Vec<String>),
}

impl Source {
    /// Materialise the filename list.
    pub fn resolve(&self) -> Result<Vec<CompactString>> {
        match self {
            Source::Directory(path) => listing::list_directory(path),
            Source::List(names) => Ok(names.iter().map(CompactString::new).collect()),
        }
    }

    /// Short label for logs and multi-source output headers.
    pub fn label(&self) -> String {
        match self {
            Source::Directory(path) => path.display().to_string(),
            Source::List(names) => format!("<{} names>", names.len()),
        }
    }
}

impl From<PathBuf> for Source {
    fn from(path: PathBuf) -> Self {
        Source::Directory(path)
    }
}

impl From<Vec<String>> for Source {
    fn from(names: Vec<String>) -> Self {
        Source::List(names)
    }
}

/// Resolve `source` and group its names into sequences.
pub fn get_sequences(source: &Source, options: &DetectOptions) -> Result<Vec<Sequence>> {
    let names = source.resolve().inspect_err(|e| error!("{e}"))?;
    debug!("Grouping {} names from {}", names.len(), source.label());
    Ok(group(names, options))
}

/// Run [`get_sequences`] for every source on the rayon pool.
///
/// Results are returned in the same order as `sources`; one failing source
/// does not affect the others.
pub fn get_sequences_many(
    sources: &[Source],
    options: &DetectOptions,
) -> Vec<Result<Vec<Sequence>>> {
    sources
        .par_iter()
        .map(|source| get_sequences(source, options))
        .collect()
}
