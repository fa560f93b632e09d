/// Frame extraction, range compression and gap detection.
///
/// All functions here are pure. They work on the arbitrary-width
/// [`FrameNumber`] so very long digit runs never truncate.
use crate::model::{FileName, FrameNumber};
use std::collections::{BTreeSet, HashMap};

/// Distinct frame numbers of a sequence's members, ascending.
///
/// Each member's digit runs are diffed against the first member's as a
/// multiset; every run left over on either side is a frame. With fewer than
/// two members there is nothing to diff and the result is empty.
pub fn extract_frames(members: &[FileName]) -> Vec<FrameNumber> {
    let Some((first, rest)) = members.split_first() else {
        return Vec::new();
    };
    if rest.is_empty() {
        return Vec::new();
    }

    let mut frames = BTreeSet::new();
    for member in rest {
        let mut balance: HashMap<&str, isize> = HashMap::new();
        for run in first.digits() {
            *balance.entry(run.as_str()).or_default() += 1;
        }
        for run in member.digits() {
            *balance.entry(run.as_str()).or_default() -= 1;
        }
        frames.extend(
            balance
                .into_iter()
                .filter(|&(_, count)| count != 0)
                .filter_map(|(run, _)| FrameNumber::parse(run)),
        );
    }
    frames.into_iter().collect()
}

/// Compress sorted, distinct frames into consecutive runs.
///
/// `[1, 2, 3, 5, 6, 9, 10]` becomes `"1-3 5-6 9-10"`; singletons stay bare.
pub fn compress_range(frames: &[FrameNumber]) -> String {
    let mut groups: Vec<String> = Vec::new();
    let mut iter = frames.iter();
    let Some(mut start) = iter.next() else {
        return String::new();
    };
    let mut end = start;

    for frame in iter {
        if frame.follows(end) {
            end = frame;
            continue;
        }
        groups.push(render_run(start, end));
        start = frame;
        end = frame;
    }
    groups.push(render_run(start, end));

    groups.join(" ")
}

fn render_run(start: &FrameNumber, end: &FrameNumber) -> String {
    if start == end {
        start.to_string()
    } else {
        format!("{start}-{end}")
    }
}

/// Parse a compressed range back into frames.
///
/// Accepts the output of [`compress_range`]; returns `None` on anything
/// that is not space-separated `N` or `A-B` with `A <= B`.
pub fn parse_range(text: &str) -> Option<Vec<FrameNumber>> {
    let mut frames = Vec::new();
    for group in text.split_whitespace() {
        match group.split_once('-') {
            Some((a, b)) => {
                let start = FrameNumber::parse(a)?;
                let end = FrameNumber::parse(b)?;
                if start > end {
                    return None;
                }
                let mut frame = start;
                while frame < end {
                    let next = frame.successor();
                    frames.push(frame);
                    frame = next;
                }
                frames.push(end);
            }
            None => frames.push(FrameNumber::parse(group)?),
        }
    }
    Some(frames)
}

/// Frames absent from `frames` in the half-open span `[min, max)`.
///
/// `frames` must be sorted ascending. The maximum is never scanned; since it
/// is always present this only matters for callers passing other data.
pub fn missing(frames: &[FrameNumber]) -> Vec<FrameNumber> {
    let (Some(min), Some(max)) = (frames.first(), frames.last()) else {
        return Vec::new();
    };

    let mut gaps = Vec::new();
    let mut present = frames.iter().peekable();
    let mut frame = min.clone();
    while frame < *max {
        while present.next_if(|p| **p < frame).is_some() {}
        if present.peek().is_some_and(|p| **p == frame) {
            present.next();
        } else {
            gaps.push(frame.clone());
        }
        frame = frame.successor();
    }
    gaps
}

/// Gaps in `frames` as inclusive `(start, end)` spans.
///
/// `frames` must be sorted ascending and distinct. Only adjacent pairs are
/// visited, so cost follows the number of frames rather than the width of
/// the range. Covers the same frames as [`missing`].
pub fn missing_spans(frames: &[FrameNumber]) -> Vec<(FrameNumber, FrameNumber)> {
    frames
        .windows(2)
        .filter(|pair| !pair[1].follows(&pair[0]))
        .filter_map(|pair| Some((pair[0].successor(), pair[1].predecessor()?)))
        .collect()
}

/// Render spans from [`missing_spans`] the way [`compress_range`] renders
/// runs: `"4 7-8"`.
pub fn compress_spans(spans: &[(FrameNumber, FrameNumber)]) -> String {
    spans
        .iter()
        .map(|(start, end)| render_run(start, end))
        .collect::<Vec<_>>()
        .join(" ")
}
