use crate::assignment::BitAssignment;
use crate::pipeline::binary::{parse_binary, BitStringPair};
use serde::Serialize;
use std::ops::RangeInclusive;

/// Width of one ASCII group in bit symbols
pub const GROUP_BITS: usize = 7;

/// Printable ASCII code points
pub const PRINTABLE: RangeInclusive<u64> = 32..=126;

/// Result of reading a bit string as 7-bit ASCII
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "text", rename_all = "kebab-case")]
pub enum Extraction {
    /// At least one group decoded to a printable character
    Text(String),
    /// No group decoded to a printable character
    NoResult,
}

impl Extraction {
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            Self::NoResult => None,
        }
    }
}

/// Character for a value in the printable ASCII range
pub fn printable_char(value: u64) -> Option<char> {
    if PRINTABLE.contains(&value) {
        char::from_u32(value as u32)
    } else {
        None
    }
}

/// Decode non-overlapping 7-symbol groups of `bits`.
///
/// A trailing group shorter than 7 symbols is ignored. Groups holding a
/// non-binary symbol or a value outside 32..=126 are skipped.
pub fn extract_ascii(bits: &str) -> Extraction {
    let symbols: Vec<char> = bits.chars().collect();
    let text: String = symbols
        .chunks_exact(GROUP_BITS)
        .filter_map(|group| parse_binary(group.iter().copied()).and_then(printable_char))
        .collect();

    if text.is_empty() {
        Extraction::NoResult
    } else {
        Extraction::Text(text)
    }
}

/// ASCII extraction under both assignments, reported side by side
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionPair {
    pub space_zero: Extraction,
    pub space_one: Extraction,
}

impl ExtractionPair {
    pub fn from_bits(bits: &BitStringPair) -> Self {
        Self {
            space_zero: extract_ascii(&bits.space_zero),
            space_one: extract_ascii(&bits.space_one),
        }
    }

    pub fn get(&self, assignment: BitAssignment) -> &Extraction {
        match assignment {
            BitAssignment::SpaceZero => &self.space_zero,
            BitAssignment::SpaceOne => &self.space_one,
        }
    }
}
