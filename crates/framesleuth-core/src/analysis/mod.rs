/// Analysis modules — the sequence detection pipeline.
///
/// Tokenizer → sibling matcher → grouping → ranges → summary.
pub mod grouping;
pub mod range;
pub mod sibling;
pub mod summary;
pub mod tokenizer;

pub use grouping::{group, DetectOptions};
pub use range::{
    compress_range, compress_spans, extract_frames, missing, missing_spans, parse_range,
};
pub use sibling::{is_sibling, sibling_position};
pub use summary::{summarise, SequenceSummary};
pub use tokenizer::{tokenize, Tokens};
