/// Sequence aggregation — one pass over a sorted filename list.
///
/// Each name is tested against the **first member** of every open sequence,
/// in creation order, and joins the first one that accepts it. Otherwise it
/// seeds a new sequence. Testing only first members is what makes the
/// result depend on sort order, so names are always sorted first.
use crate::analysis::sibling::sibling_position;
use crate::model::{FileName, Sequence};
use compact_str::CompactString;
use std::time::Instant;
use tracing::debug;

/// Per-pass detection settings, owned by the caller for one invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetectOptions {
    /// Emit a `debug!` event for every sibling comparison. Very noisy on
    /// large directories.
    pub trace_comparisons: bool,
}

impl DetectOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trace_comparisons(mut self, enabled: bool) -> Self {
        self.trace_comparisons = enabled;
        self
    }
}

/// Group `filenames` into maximal sequences.
///
/// Names are sorted ascending (byte-wise, stable) before grouping.
/// Every input name lands in exactly one returned sequence; duplicates
/// become separate one-member sequences since a name is never its own
/// sibling.
pub fn group<I, S>(filenames: I, options: &DetectOptions) -> Vec<Sequence>
where
    I: IntoIterator<Item = S>,
    S: Into<CompactString>,
{
    let start = Instant::now();

    let mut names: Vec<CompactString> = filenames.into_iter().map(Into::into).collect();
    names.sort();
    debug!("Found {} files", names.len());

    let mut sequences: Vec<Sequence> = Vec::new();
    for name in names {
        let file = FileName::new(name);
        match find_sequence(&sequences, &file, options) {
            Some(i) => {
                if let Some(first) = sequences[i].first() {
                    debug!("Seq \"{}\" contains File \"{}\"", first, file);
                }
                sequences[i].append(file);
            }
            None => sequences.push(Sequence::new(file)),
        }
    }

    debug!(sequences = sequences.len(), "Done in {:?}", start.elapsed());
    sequences
}

/// Index of the first sequence (in creation order) whose first member is a
/// sibling of `file`.
fn find_sequence(
    sequences: &[Sequence],
    file: &FileName,
    options: &DetectOptions,
) -> Option<usize> {
    sequences.iter().position(|seq| {
        let Some(first) = seq.first() else {
            return false;
        };
        let position = sibling_position(first, file);
        if options.trace_comparisons {
            debug!(a = %first, b = %file, diff = ?position, "sibling comparison");
        }
        position.is_some()
    })
}
