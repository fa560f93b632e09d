/// Sibling matching — do two filenames belong to the same sequence?
///
/// Two names are siblings when they have the same number of digit runs,
/// differ in exactly one run (compared as strings, so `"01"` and `"1"`
/// differ), and share an identical non-digit skeleton. Anything else,
/// including identical names and names that differ in several runs, is
/// "not a sibling". There is no error path.
use crate::model::FileName;

/// Index of the single digit run in which `a` and `b` differ, or `None`
/// when they are not siblings.
pub fn sibling_position(a: &FileName, b: &FileName) -> Option<usize> {
    if a.digits().len() != b.digits().len() {
        return None;
    }

    let mut differing = a
        .digits()
        .iter()
        .zip(b.digits())
        .enumerate()
        .filter(|(_, (x, y))| x != y)
        .map(|(i, _)| i);

    let position = differing.next()?;
    if differing.next().is_some() {
        return None;
    }

    if a.parts() != b.parts() {
        return None;
    }

    Some(position)
}

/// True when `a` and `b` are members of the same sequence. Symmetric.
pub fn is_sibling(a: &FileName, b: &FileName) -> bool {
    sibling_position(a, b).is_some()
}
