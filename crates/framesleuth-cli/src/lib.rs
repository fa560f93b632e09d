/// FrameSleuth CLI — argument parsing, rendering and exit codes.
///
/// All detection logic lives in `framesleuth-core`; this crate only turns
/// arguments into [`DetectOptions`](framesleuth_core::DetectOptions) and
/// summaries into text.
pub mod app;
pub mod args;
pub mod render;

pub use app::run;
pub use args::{Args, OutputFormat};
