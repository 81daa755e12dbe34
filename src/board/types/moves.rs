//! Move type.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;
use crate::board::error::SquareError;

/// A move, recorded purely as a source/destination pair.
///
/// Captures carry no extra state: applying a move overwrites whatever sits on
/// the destination square. Castling is likewise recorded as the king's
/// displacement only; the rook shift is an implicit side effect of applying it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    /// Create a move between two squares.
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = SquareError;

    /// Parse long algebraic text, e.g. "e2e4".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 4 || !s.is_ascii() {
            return Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            });
        }
        let from: Square = s[..2].parse()?;
        let to: Square = s[2..].parse()?;
        Ok(Move::new(from, to))
    }
}
