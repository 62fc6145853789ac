//! Normalization of identifiers typed by a user or decoded from a barcode.

use std::{fmt, ops::RangeInclusive};

/// Digit counts a decoded barcode must have to be taken as an ISBN candidate.
pub const SCAN_DIGITS: RangeInclusive<usize> = 10..=13;

/// Removes every hyphen and whitespace character from `raw`.
///
/// This is lexical only: no checksum, digit or length validation is applied.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect()
}

/// A normalized identifier, ready to be sent to the bibliographic service.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Isbn(String);

impl Isbn {
    /// Normalizes manually entered text.
    ///
    /// Returns [`None`] when `raw` is empty once trimmed, any other input is accepted as is after
    /// [`normalize`].
    #[must_use]
    pub fn normalize(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(normalize(trimmed)))
        }
    }

    /// Normalizes text emitted by a barcode decoder.
    ///
    /// On top of [`normalize`] every character that is not a decimal digit is dropped, and the
    /// result is only accepted when its length is within [`SCAN_DIGITS`]. Anything else is scanner
    /// noise and returns [`None`].
    #[must_use]
    pub fn from_scan(decoded: &str) -> Option<Self> {
        let mut digits = normalize(decoded);
        digits.retain(|c| c.is_ascii_digit());

        SCAN_DIGITS.contains(&digits.len()).then(|| Self(digits))
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
