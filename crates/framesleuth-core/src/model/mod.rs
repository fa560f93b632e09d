/// Data model for FrameSleuth.
///
/// Re-exports the filename token type, arbitrary-width frame numbers,
/// padding specs and the sequence container.
pub mod file_name;
pub mod frame;
pub mod padding;
pub mod sequence;

pub use file_name::FileName;
pub use frame::FrameNumber;
pub use padding::Padding;
pub use sequence::Sequence;
