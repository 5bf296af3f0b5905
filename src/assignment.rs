use crate::error::{Result, WsStegoError};
use std::fmt;

/// Polarity used when mapping whitespace to bits
///
/// Exactly two assignments exist and the analyzer always runs both; neither
/// is preferred over the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BitAssignment {
    /// space = 0, tab = 1
    #[default]
    SpaceZero,
    /// space = 1, tab = 0
    SpaceOne,
}

impl BitAssignment {
    pub const ALL: [BitAssignment; 2] = [BitAssignment::SpaceZero, BitAssignment::SpaceOne];

    /// Bit symbol for a space or tab, `None` for any other character
    pub fn bit_for(self, c: char) -> Option<char> {
        match (self, c) {
            (Self::SpaceZero, ' ') | (Self::SpaceOne, '\t') => Some('0'),
            (Self::SpaceZero, '\t') | (Self::SpaceOne, ' ') => Some('1'),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::SpaceZero => "Space=0, Tab=1",
            Self::SpaceOne => "Tab=0, Space=1",
        }
    }
}

impl fmt::Display for BitAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for BitAssignment {
    type Err = WsStegoError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "space0" | "space-zero" | "tab1" | "tab-one" => Ok(Self::SpaceZero),
            "space1" | "space-one" | "tab0" | "tab-zero" => Ok(Self::SpaceOne),
            _ => Err(WsStegoError::UnsupportedAssignment(s.to_string())),
        }
    }
}
