/// Arbitrary-width frame numbers.
///
/// Digit runs in filenames can be longer than any machine integer, so a
/// frame is kept as its canonical decimal string: no leading zeros, and
/// `"0"` for zero. Canonical form makes ordering a (length, lexical)
/// comparison and keeps equality structural.
use compact_str::{CompactString, ToCompactString};
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrameNumber(CompactString);

/// Returned when a string is not a non-empty run of ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFrameError;

impl fmt::Display for ParseFrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("frame number must be a non-empty run of decimal digits")
    }
}

impl std::error::Error for ParseFrameError {}

impl FrameNumber {
    /// Decode a digit run. Leading zeros are dropped; width is not kept here.
    pub fn parse(run: &str) -> Option<Self> {
        if run.is_empty() || !run.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let trimmed = run.trim_start_matches('0');
        if trimmed.is_empty() {
            Some(Self(CompactString::const_new("0")))
        } else {
            Some(Self(CompactString::new(trimmed)))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The value as `u64`, if it fits.
    pub fn to_u64(&self) -> Option<u64> {
        self.0.parse().ok()
    }

    /// `self + 1`.
    pub fn successor(&self) -> Self {
        let mut digits = self.0.as_bytes().to_vec();
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, b'1');
                break;
            }
            i -= 1;
            if digits[i] == b'9' {
                digits[i] = b'0';
            } else {
                digits[i] += 1;
                break;
            }
        }
        // Only ASCII digits were written.
        Self(digits.iter().map(|&b| b as char).collect())
    }

    /// `self - 1`, or `None` for zero.
    pub fn predecessor(&self) -> Option<Self> {
        if self.0 == "0" {
            return None;
        }
        let mut digits = self.0.as_bytes().to_vec();
        let mut i = digits.len();
        while i > 0 {
            i -= 1;
            if digits[i] == b'0' {
                digits[i] = b'9';
            } else {
                digits[i] -= 1;
                break;
            }
        }
        let text: String = digits.iter().map(|&b| b as char).collect();
        Self::parse(&text)
    }

    /// True when `self == other + 1`.
    pub fn follows(&self, other: &FrameNumber) -> bool {
        // Cheap reject: a successor is never shorter, and at most one digit longer.
        let (a, b) = (self.0.len(), other.0.len());
        if a < b || a > b + 1 {
            return false;
        }
        other.successor() == *self
    }

    /// Zero-pad to at least `width` characters.
    pub fn padded(&self, width: usize) -> String {
        format!("{:0>width$}", self.0.as_str())
    }
}

impl From<u64> for FrameNumber {
    fn from(n: u64) -> Self {
        Self(n.to_compact_string())
    }
}

impl FromStr for FrameNumber {
    type Err = ParseFrameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or(ParseFrameError)
    }
}

impl Ord for FrameNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.as_str().cmp(other.0.as_str()))
    }
}

impl PartialOrd for FrameNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for FrameNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Serialised as a JSON number when it fits in `u64`, otherwise as a string.
impl Serialize for FrameNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.to_u64() {
            Some(n) => serializer.serialize_u64(n),
            None => serializer.serialize_str(&self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn f(s: &str) -> FrameNumber {
        FrameNumber::parse(s).expect("valid digits")
    }

    #[test]
    fn parse_strips_leading_zeros() {
        assert_eq!(f("0040").as_str(), "40");
        assert_eq!(f("0000").as_str(), "0");
        assert_eq!(f("7").as_str(), "7");
    }

    #[test]
    fn parse_rejects_non_digits() {
        assert!(FrameNumber::parse("").is_none());
        assert!(FrameNumber::parse("12a").is_none());
        assert!(FrameNumber::parse("-3").is_none());
        assert!("x".parse::<FrameNumber>().is_err());
    }

    #[test]
    fn ordering_is_numeric() {
        assert!(f("9") < f("10"));
        assert!(f("0100") > f("99"));
        assert_eq!(f("007").cmp(&f("7")), Ordering::Equal);
    }

    #[test]
    fn successor_carries() {
        assert_eq!(f("0").successor(), f("1"));
        assert_eq!(f("41").successor(), f("42"));
        assert_eq!(f("199").successor(), f("200"));
        assert_eq!(f("999").successor(), f("1000"));
    }

    #[test]
    fn predecessor_borrows() {
        assert_eq!(f("0").predecessor(), None);
        assert_eq!(f("1").predecessor(), Some(f("0")));
        assert_eq!(f("42").predecessor(), Some(f("41")));
        assert_eq!(f("1000").predecessor(), Some(f("999")));
        assert_eq!(f("18446744073709551616").predecessor(), Some(f("18446744073709551615")));
    }

    #[test]
    fn follows_detects_consecutive() {
        assert!(f("10").follows(&f("9")));
        assert!(!f("11").follows(&f("9")));
        assert!(!f("9").follows(&f("10")));
        assert!(!f("5").follows(&f("5")));
    }

    /// Values past `u64::MAX` must not wrap or truncate.
    #[test]
    fn very_long_runs_keep_full_value() {
        let big = f("18446744073709551615");
        assert_eq!(big.to_u64(), Some(u64::MAX));
        let bigger = big.successor();
        assert_eq!(bigger.as_str(), "18446744073709551616");
        assert_eq!(bigger.to_u64(), None);
        assert!(bigger > big);
    }

    #[test]
    fn padded_fills_to_width() {
        assert_eq!(f("7").padded(4), "0007");
        assert_eq!(f("12345").padded(4), "12345");
        assert_eq!(f("3").padded(0), "3");
    }

    #[test]
    fn from_u64_matches_parse() {
        assert_eq!(FrameNumber::from(1234), f("01234"));
        assert_eq!(FrameNumber::from(0), f("0"));
    }
}
