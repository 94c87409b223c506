use super::RackError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// A row letter plus a 1-based column number, e.g. `C3`.
///
/// Parsing trims whitespace and upper-cases the row, so `" c3"` and `"C3"` name
/// the same box. The column is plain decimal digits with no sign or leading
/// zero, so `"C03"` and `"C+3"` are rejected rather than read as `C3`.
/// Whether the coordinate exists on a given rack is decided by
/// [`RackLayout`](super::RackLayout), not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RackCoordinate {
    pub row: char,
    pub column: u32,
}

impl RackCoordinate {
    pub fn new(row: char, column: u32) -> Self {
        Self {
            row: row.to_ascii_uppercase(),
            column,
        }
    }
}

impl FromStr for RackCoordinate {
    type Err = RackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let row = chars
            .next()
            .filter(char::is_ascii_alphabetic)
            .ok_or_else(|| RackError::InvalidCoordinate(s.to_string()))?;
        let digits = chars.as_str();
        if !digits.bytes().all(|b| b.is_ascii_digit()) || digits.starts_with('0') {
            return Err(RackError::InvalidCoordinate(s.to_string()));
        }
        let column = digits
            .parse::<u32>()
            .map_err(|_| RackError::InvalidCoordinate(s.to_string()))?;
        Ok(Self::new(row, column))
    }
}

impl Display for RackCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.row, self.column)
    }
}
