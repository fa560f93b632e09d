/// An ordered group of sibling filenames.
///
/// Members are kept in the order they were appended (first-seen order), not
/// sorted by frame. Membership is always tested against the first member,
/// and the position of the varying digit run is fixed by the first member
/// that matches it.
use super::file_name::FileName;
use super::frame::FrameNumber;
use super::padding::Padding;
use crate::analysis::range;
use crate::analysis::sibling::sibling_position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    members: Vec<FileName>,
    /// Digit-run index that varies across members; `None` until a sibling
    /// of the first member is appended.
    frame_index: Option<usize>,
}

impl Sequence {
    /// A one-member sequence seeded with `first`.
    pub fn new(first: impl Into<FileName>) -> Self {
        Self {
            members: vec![first.into()],
            frame_index: None,
        }
    }

    /// Build a sequence from names in the given order, without sibling checks.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<FileName>,
    {
        let mut seq = Self {
            members: Vec::new(),
            frame_index: None,
        };
        for name in names {
            seq.append(name);
        }
        seq
    }

    /// Append a member without checking that it belongs. Use
    /// [`contains`](Self::contains) first when that matters.
    pub fn append(&mut self, file: impl Into<FileName>) {
        let file = file.into();
        if self.frame_index.is_none() {
            if let Some(first) = self.members.first() {
                self.frame_index = sibling_position(first, &file);
            }
        }
        self.members.push(file);
    }

    /// True when `file` is a sibling of the first member. Always false for
    /// an empty sequence.
    pub fn contains(&self, file: &FileName) -> bool {
        self.first()
            .is_some_and(|first| sibling_position(first, file).is_some())
    }

    /// [`contains`](Self::contains) for a plain string.
    pub fn contains_name(&self, name: &str) -> bool {
        self.contains(&FileName::new(name))
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn first(&self) -> Option<&FileName> {
        self.members.first()
    }

    pub fn members(&self) -> &[FileName] {
        &self.members
    }

    /// Member names in first-seen order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(FileName::name)
    }

    /// Index of the varying digit run within each member's digit runs.
    pub fn frame_index(&self) -> Option<usize> {
        self.frame_index
    }

    /// Distinct frame numbers, ascending. Empty for fewer than two members.
    pub fn frames(&self) -> Vec<FrameNumber> {
        range::extract_frames(&self.members)
    }

    /// Frames absent from `[min, max)` of [`frames`](Self::frames).
    ///
    /// Expands every gap, so cost follows the width of the range. Listings
    /// should use [`range::missing_spans`] instead.
    pub fn missing(&self) -> Vec<FrameNumber> {
        range::missing(&self.frames())
    }

    /// Compressed frame range, e.g. `"1-3 5-6 9-10"`. Empty for one member.
    pub fn frame_range(&self) -> String {
        range::compress_range(&self.frames())
    }

    pub fn padding(&self) -> Padding {
        match (self.members.len(), self.frame_run()) {
            (0 | 1, _) => Padding::None,
            (_, Some(run)) => Padding::from_width(run.len()),
            (_, None) => Padding::Unpadded,
        }
    }

    /// Text before the frame number. The whole name for a single member.
    ///
    /// The split is at the position of the varying digit run, not at the
    /// first textual occurrence of the frame digits.
    pub fn head(&self) -> String {
        match (self.first(), self.frame_index) {
            (None, _) => String::new(),
            (Some(first), Some(index)) if self.members.len() > 1 => first.tokens().head(index),
            (Some(first), _) => first.name().to_string(),
        }
    }

    /// Text after the frame number, split at the same run position as
    /// [`head`](Self::head). Empty for a single member.
    pub fn tail(&self) -> String {
        match (self.first(), self.frame_index) {
            (Some(first), Some(index)) if self.members.len() > 1 => first.tokens().tail(index),
            _ => String::new(),
        }
    }

    /// The filename `frame` has (or would have) in this sequence.
    pub fn frame_name(&self, frame: &FrameNumber) -> String {
        format!(
            "{}{}{}",
            self.head(),
            self.padding().format_frame(frame),
            self.tail()
        )
    }

    /// Filenames of the frames reported by [`missing`](Self::missing).
    pub fn missing_names(&self) -> Vec<String> {
        let (head, tail, padding) = (self.head(), self.tail(), self.padding());
        self.missing()
            .iter()
            .map(|frame| format!("{head}{}{tail}", padding.format_frame(frame)))
            .collect()
    }

    /// The first member's varying digit run.
    fn frame_run(&self) -> Option<&str> {
        let index = self.frame_index?;
        self.first()?.digits().get(index).map(|run| run.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames(seq: &Sequence) -> Vec<String> {
        seq.frames().iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn padded_sequence_summary_fields() {
        let seq = Sequence::from_names(["file.0001.jpg", "file.0002.jpg", "file.0003.jpg"]);
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.head(), "file.");
        assert_eq!(seq.tail(), ".jpg");
        assert_eq!(seq.padding(), Padding::Zeroed(4));
        assert_eq!(seq.frame_range(), "1-3");
        assert!(seq.missing().is_empty());
    }

    #[test]
    fn append_extends_range_and_contains_checks_first() {
        let mut seq = Sequence::from_names(["file.0001.jpg", "file.0002.jpg", "file.0003.jpg"]);
        seq.append("file.0006.jpg");
        assert_eq!(seq.frame_range(), "1-3 6");
        assert!(seq.contains_name("file.0009.jpg"));
        assert!(!seq.contains_name("file.0009.pic"));
    }

    #[test]
    fn single_member_is_degenerate() {
        let seq = Sequence::new("alpha.txt");
        assert_eq!(seq.head(), "alpha.txt");
        assert_eq!(seq.tail(), "");
        assert_eq!(seq.padding(), Padding::None);
        assert_eq!(seq.frame_range(), "");
        assert!(seq.frames().is_empty());
        assert!(seq.missing().is_empty());
    }

    #[test]
    fn empty_sequence_contains_nothing() {
        let seq = Sequence::from_names(Vec::<&str>::new());
        assert!(seq.is_empty());
        assert!(!seq.contains_name("file.1.jpg"));
        assert_eq!(seq.head(), "");
    }

    #[test]
    fn gaps_are_reported_as_missing() {
        let names = [1, 2, 3, 5, 6, 9, 10].map(|n| format!("bm3k.{n:04}.jpg"));
        let seq = Sequence::from_names(names);
        assert_eq!(seq.frame_range(), "1-3 5-6 9-10");
        let missing: Vec<String> = seq.missing().iter().map(|f| f.to_string()).collect();
        assert_eq!(missing, vec!["4", "7", "8"]);
        assert_eq!(
            seq.missing_names(),
            vec!["bm3k.0004.jpg", "bm3k.0007.jpg", "bm3k.0008.jpg"]
        );
    }

    /// The frame may be the first of several runs.
    #[test]
    fn head_and_tail_use_the_varying_run() {
        let seq = Sequence::from_names(["file1.03.rgb", "file2.03.rgb", "file4.03.rgb"]);
        assert_eq!(seq.head(), "file");
        assert_eq!(seq.tail(), ".03.rgb");
        assert_eq!(seq.padding(), Padding::Unpadded);
        assert_eq!(frames(&seq), vec!["1", "2", "4"]);
        assert_eq!(seq.frame_name(&FrameNumber::from(3)), "file3.03.rgb");
    }

    /// The frame digits also occurring earlier in the name must not shift
    /// the head/tail split.
    #[test]
    fn head_ignores_earlier_copies_of_the_frame_digits() {
        let seq = Sequence::from_names(["v1_1.exr", "v1_2.exr"]);
        assert_eq!(seq.head(), "v1_");
        assert_eq!(seq.tail(), ".exr");
        assert_eq!(frames(&seq), vec!["1", "2"]);
    }

    /// Frames are sorted numerically, not in member order.
    #[test]
    fn frames_are_sorted_numerically() {
        let seq = Sequence::from_names(["f.10.x", "f.9.x", "f.100.x"]);
        assert_eq!(frames(&seq), vec!["9", "10", "100"]);
        assert_eq!(seq.padding(), Padding::Zeroed(2));
    }

    #[test]
    fn frame_index_is_fixed_by_first_sibling() {
        let seq = Sequence::from_names(["file01_0040.rgb", "file01_0041.rgb"]);
        assert_eq!(seq.frame_index(), Some(1));
        assert_eq!(seq.head(), "file01_");
        assert_eq!(seq.padding(), Padding::Zeroed(4));
    }
}
