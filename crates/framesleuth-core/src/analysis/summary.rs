/// Presentation data for one sequence.
///
/// Carries every field an external formatter needs. No text layout happens
/// here beyond the compressed range and the spacing hint.
use crate::analysis::range::{compress_range, compress_spans, missing_spans};
use crate::model::{FrameNumber, Padding, Sequence};
use serde::Serialize;

/// Names shorter than this get an extra tab so ranges line up.
const SHORT_NAME_CHARS: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SequenceSummary {
    pub length: usize,
    pub head: String,
    pub padding: Padding,
    pub tail: String,
    pub frame_range: String,
    /// Tab characters to put between the name pattern and the range.
    #[serde(skip)]
    pub spacing: &'static str,
    pub frames: Vec<FrameNumber>,
    /// Gaps between `frames`, compressed like `frame_range` (`"4 7-8"`).
    /// Use [`Sequence::missing`] for the expanded list.
    pub missing_range: String,
    pub members: Vec<String>,
}

impl SequenceSummary {
    pub fn from_sequence(seq: &Sequence) -> Self {
        let frames = seq.frames();
        let missing_range = compress_spans(&missing_spans(&frames));
        let frame_range = compress_range(&frames);
        let first_len = seq.first().map_or(0, |f| f.name().chars().count());

        Self {
            length: seq.len(),
            head: seq.head(),
            padding: seq.padding(),
            tail: seq.tail(),
            frame_range,
            spacing: spacing_for(first_len),
            frames,
            missing_range,
            members: seq.names().map(str::to_string).collect(),
        }
    }

    /// `head + padding + tail`, e.g. `file.%04d.jpg`.
    pub fn pattern(&self) -> String {
        format!("{}{}{}", self.head, self.padding, self.tail)
    }
}

impl From<&Sequence> for SequenceSummary {
    fn from(seq: &Sequence) -> Self {
        Self::from_sequence(seq)
    }
}

fn spacing_for(name_chars: usize) -> &'static str {
    if name_chars < SHORT_NAME_CHARS {
        "\t\t"
    } else {
        "\t"
    }
}

/// Summarise every sequence in order.
pub fn summarise(sequences: &[Sequence]) -> Vec<SequenceSummary> {
    sequences.iter().map(SequenceSummary::from_sequence).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_of_gapped_sequence() {
        let names = [1, 2, 3, 5, 6, 9, 10].map(|n| format!("bm3k.{n:04}.jpg"));
        let summary = SequenceSummary::from(&Sequence::from_names(names));
        assert_eq!(summary.length, 7);
        assert_eq!(summary.pattern(), "bm3k.%04d.jpg");
        assert_eq!(summary.frame_range, "1-3 5-6 9-10");
        assert_eq!(summary.missing_range, "4 7-8");
        assert_eq!(summary.members.len(), 7);
        assert_eq!(summary.members[0], "bm3k.0001.jpg");
    }

    #[test]
    fn spacing_depends_on_first_name_length() {
        let short = SequenceSummary::from(&Sequence::new("alpha.txt"));
        assert_eq!(short.spacing, "\t\t");
        let long = SequenceSummary::from(&Sequence::new("file.info.03.rgb"));
        assert_eq!(long.spacing, "\t");
    }

    #[test]
    fn single_file_summary() {
        let summary = SequenceSummary::from(&Sequence::new("alpha.txt"));
        assert_eq!(summary.length, 1);
        assert_eq!(summary.pattern(), "alpha.txt");
        assert_eq!(summary.frame_range, "");
        assert!(summary.frames.is_empty());
        assert_eq!(summary.missing_range, "");
    }

    /// A date-stamped frame next to frame 1 spans thirteen digits of gap.
    /// Summarising must stay proportional to the member count.
    #[test]
    fn sparse_frames_summarise_quickly() {
        let seqs = crate::analysis::group(
            ["IMG_1.jpg", "IMG_20240101123456.jpg"],
            &crate::analysis::DetectOptions::default(),
        );
        let summaries = summarise(&seqs);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].frame_range, "1 20240101123456");
        assert_eq!(summaries[0].missing_range, "2-20240101123455");
    }

    #[test]
    fn summarise_keeps_order() {
        let seqs = vec![Sequence::new("b.txt"), Sequence::new("a.txt")];
        let summaries = summarise(&seqs);
        assert_eq!(summaries[0].head, "b.txt");
        assert_eq!(summaries[1].head, "a.txt");
    }
}
