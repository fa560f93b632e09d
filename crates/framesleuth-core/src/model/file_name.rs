/// A filename paired with its token set.
///
/// Tokens are derived once at construction and the value is immutable
/// afterwards; every accessor is read-only.
use crate::analysis::tokenizer::{tokenize, Tokens};
use compact_str::CompactString;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileName {
    raw: CompactString,
    tokens: Tokens,
}

impl FileName {
    pub fn new(raw: impl Into<CompactString>) -> Self {
        let raw = raw.into();
        let tokens = tokenize(&raw);
        Self { raw, tokens }
    }

    /// The original, untouched filename.
    pub fn name(&self) -> &str {
        &self.raw
    }

    /// Digit runs in left-to-right order.
    pub fn digits(&self) -> &[CompactString] {
        &self.tokens.digits
    }

    /// Non-digit segments around the digit runs.
    pub fn parts(&self) -> &[CompactString] {
        &self.tokens.parts
    }

    pub fn tokens(&self) -> &Tokens {
        &self.tokens
    }
}

impl From<&str> for FileName {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for FileName {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl AsRef<str> for FileName {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
