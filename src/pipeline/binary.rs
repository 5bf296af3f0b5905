use crate::assignment::BitAssignment;
use num_bigint::BigUint;
use serde::Serialize;

/// Map a whitespace stream to a bit string
///
/// Newlines are dropped. Spaces and tabs become '0'/'1' per `assignment`.
/// Every other character, carriage return included, is kept as-is, so the
/// result may contain non-binary symbols.
pub fn map_bits(text: &str, assignment: BitAssignment) -> String {
    text.chars()
        .filter(|&c| c != '\n')
        .map(|c| assignment.bit_for(c).unwrap_or(c))
        .collect()
}

/// Parse a short sequence of '0'/'1' symbols, such as one ASCII group.
///
/// Returns `None` for an empty sequence, any non-binary symbol, or a value
/// that does not fit in a `u64`. Use [`parse_binary_wide`] for operands of
/// unbounded length.
pub fn parse_binary<I>(symbols: I) -> Option<u64>
where
    I: IntoIterator<Item = char>,
{
    let mut value: u64 = 0;
    let mut seen = false;
    for symbol in symbols {
        let bit = match symbol {
            '0' => 0,
            '1' => 1,
            _ => return None,
        };
        value = value.checked_mul(2)?.checked_add(bit)?;
        seen = true;
    }
    seen.then_some(value)
}

/// Parse a '0'/'1' string of any length as an unsigned integer.
///
/// Returns `None` only for an empty string or a non-binary symbol.
pub fn parse_binary_wide(bits: &str) -> Option<BigUint> {
    if bits.is_empty() || !bits.bytes().all(|b| b == b'0' || b == b'1') {
        return None;
    }
    BigUint::parse_bytes(bits.as_bytes(), 2)
}

/// The bit strings produced by both assignments over the same text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BitStringPair {
    pub space_zero: String,
    pub space_one: String,
}

impl BitStringPair {
    pub fn from_text(text: &str) -> Self {
        Self {
            space_zero: map_bits(text, BitAssignment::SpaceZero),
            space_one: map_bits(text, BitAssignment::SpaceOne),
        }
    }

    pub fn get(&self, assignment: BitAssignment) -> &str {
        match assignment {
            BitAssignment::SpaceZero => &self.space_zero,
            BitAssignment::SpaceOne => &self.space_one,
        }
    }
}
