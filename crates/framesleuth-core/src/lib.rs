/// FrameSleuth Core — sequence detection over plain filename strings.
///
/// This crate contains all business logic with zero CLI dependencies.
/// It never touches file contents; a directory is only ever read for the
/// names of its entries.
///
/// # Modules
///
/// - [`model`] — Tokenized filenames, frame numbers, padding and sequences.
/// - [`analysis`] — Tokenizer, sibling matching, grouping, ranges, summaries.
/// - [`scanner`] — Resolving a directory or literal list into filenames.
/// - [`error`] — Source resolution errors.
pub mod analysis;
pub mod error;
pub mod model;
pub mod scanner;

pub use analysis::{group, DetectOptions, SequenceSummary};
pub use error::{Result, SourceError};
pub use model::{FileName, FrameNumber, Padding, Sequence};
pub use scanner::{get_sequences, get_sequences_many, Source};
