/// Filename tokenizer — splits a name into its digit runs and the non-digit
/// parts that separate them.
///
/// Only ASCII digits `0-9` start a run. Because ASCII bytes never appear
/// inside a multi-byte UTF-8 sequence, the scan works on raw bytes and
/// every slice boundary is a valid `char` boundary.
use compact_str::CompactString;

/// The token set of one filename.
///
/// Invariant: `parts.len() == digits.len() + 1`, and interleaving the two
/// (starting with `parts[0]`) reproduces the original string exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tokens {
    /// Non-digit segments, including empty leading/trailing/between segments.
    pub parts: Vec<CompactString>,
    /// Maximal runs of ASCII digits, left to right.
    pub digits: Vec<CompactString>,
}

impl Tokens {
    /// Interleave parts and digit runs back into the original string.
    pub fn reconstruct(&self) -> String {
        let mut out = String::with_capacity(
            self.parts.iter().map(|p| p.len()).sum::<usize>()
                + self.digits.iter().map(|d| d.len()).sum::<usize>(),
        );
        for (i, part) in self.parts.iter().enumerate() {
            out.push_str(part);
            if let Some(run) = self.digits.get(i) {
                out.push_str(run);
            }
        }
        out
    }

    /// Everything before the digit run at `index`.
    pub fn head(&self, index: usize) -> String {
        let mut out = String::new();
        for i in 0..index.min(self.digits.len()) {
            out.push_str(&self.parts[i]);
            out.push_str(&self.digits[i]);
        }
        if let Some(part) = self.parts.get(index) {
            out.push_str(part);
        }
        out
    }

    /// Everything after the digit run at `index`.
    pub fn tail(&self, index: usize) -> String {
        let mut out = String::new();
        if index >= self.digits.len() {
            return out;
        }
        for i in (index + 1)..self.parts.len() {
            out.push_str(&self.parts[i]);
            if let Some(run) = self.digits.get(i) {
                out.push_str(run);
            }
        }
        out
    }
}

/// Split `raw` into non-digit parts and digit runs.
///
/// Total and pure: a name without digits yields `parts == [raw]` and no runs.
pub fn tokenize(raw: &str) -> Tokens {
    let bytes = raw.as_bytes();
    let mut parts = Vec::new();
    let mut digits = Vec::new();

    let mut part_start = 0;
    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }
        let run_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        parts.push(CompactString::new(&raw[part_start..run_start]));
        digits.push(CompactString::new(&raw[run_start..i]));
        part_start = i;
    }
    parts.push(CompactString::new(&raw[part_start..]));

    Tokens { parts, digits }
}
