use std::fmt;

use crate::error::{Error, Result};

/// One null-terminated text unit
///
/// The terminator travels with the text: a record's wire form is its
/// UTF-8 bytes followed by a single null byte. Interior null bytes are
/// rejected at construction because the terminator is the only structure
/// the byte stream has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    text: String,
}

impl Record {
    /// Create a record from text, rejecting interior null bytes
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.contains('\0') {
            return Err(Error::InvalidRecord(text));
        }
        Ok(Self { text })
    }

    /// The record's text, without its terminator
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of bytes the record occupies on the wire
    pub fn encoded_len(&self) -> usize {
        self.text.len() + 1
    }

    /// Wire form: the text bytes plus the trailing null terminator
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.encoded_len());
        bytes.extend_from_slice(self.text.as_bytes());
        bytes.push(0);
        bytes
    }
}

impl From<u32> for Record {
    /// Decimal numerals never contain a null byte
    fn from(value: u32) -> Self {
        Self {
            text: value.to_string(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Split an assembled payload back into its null-terminated units
///
/// Terminators are stripped. A trailing run with no terminator is kept
/// as-is, since a truncated final unit is the sink's call to handle.
pub fn split_records(payload: &[u8]) -> Vec<&[u8]> {
    payload
        .split_inclusive(|&byte| byte == 0)
        .map(|unit| unit.strip_suffix(&[0]).unwrap_or(unit))
        .collect()
}
