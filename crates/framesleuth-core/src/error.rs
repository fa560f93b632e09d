/// Errors raised while resolving a [`Source`](crate::scanner::Source).
///
/// Grouping itself is infallible: ambiguous comparisons and odd filenames
/// are absorbed as "not a sibling". Only the listing step can fail.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Invalid directory: {}", .0.display())]
    InvalidDirectory(PathBuf),

    #[error("Failed to list {}: {source}", path.display())]
    Listing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory walk failed: {0}")]
    Walk(String),
}

impl SourceError {
    /// Process exit code the CLI reports for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            SourceError::InvalidDirectory(_) => 2,
            SourceError::Listing { .. } | SourceError::Walk(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, SourceError>;
