//! Square coordinates and the file/rank newtypes.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A board file (column), 0 = file a.
///
/// Deliberately not interchangeable with [`Rank`]: both wrap an integer, but
/// mixing them up is a compile error. Arithmetic and comparison against raw
/// integers are supported for stepping and bounds checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct File(pub(crate) i8);

/// A board rank (row), 0 = rank 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rank(pub(crate) i8);

macro_rules! coord_ops {
    ($name:ident) => {
        impl $name {
            /// Raw value as an array index. Callers guarantee 0..8.
            #[inline]
            #[must_use]
            pub(crate) const fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Add<i8> for $name {
            type Output = $name;
            fn add(self, rhs: i8) -> $name {
                $name(self.0 + rhs)
            }
        }

        impl Sub<i8> for $name {
            type Output = $name;
            fn sub(self, rhs: i8) -> $name {
                $name(self.0 - rhs)
            }
        }

        impl PartialEq<i8> for $name {
            fn eq(&self, other: &i8) -> bool {
                self.0 == *other
            }
        }

        impl PartialOrd<i8> for $name {
            fn partial_cmp(&self, other: &i8) -> Option<std::cmp::Ordering> {
                self.0.partial_cmp(other)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

coord_ops!(File);
coord_ops!(Rank);

/// A square on the chess board, as a (file, rank) pair.
///
/// A `Square` is always in bounds once constructed; out-of-range input is
/// rejected at the constructor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square {
    file: File,
    rank: Rank,
}

impl Square {
    /// Create a square with bounds checking.
    #[must_use]
    pub fn new(file: File, rank: Rank) -> Option<Self> {
        if (0..8).contains(&file.0) && (0..8).contains(&rank.0) {
            Some(Square { file, rank })
        } else {
            None
        }
    }

    /// Unchecked construction for internal constant tables. Callers keep
    /// both coordinates in 0..8.
    #[inline]
    pub(crate) const fn at(file: i8, rank: i8) -> Self {
        Square {
            file: File(file),
            rank: Rank(rank),
        }
    }

    /// Get the file (0 = file a).
    #[inline]
    #[must_use]
    pub const fn file(self) -> File {
        self.file
    }

    /// Get the rank (0 = rank 1).
    #[inline]
    #[must_use]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    #[inline]
    #[must_use]
    pub(crate) const fn file_index(self) -> usize {
        self.file.index()
    }

    #[inline]
    #[must_use]
    pub(crate) const fn rank_index(self) -> usize {
        self.rank.index()
    }

    /// The square displaced by `(df, dr)`, or `None` when it leaves the board.
    #[must_use]
    pub fn offset(self, df: i8, dr: i8) -> Option<Self> {
        Square::new(self.file + df, self.rank + dr)
    }

    /// Iterate over all 64 squares, a1 through h8.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8i8).flat_map(|rank| (0..8i8).map(move |file| Square::at(file, rank)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (self.file.0 as u8 + b'a') as char,
            self.rank.0 + 1
        )
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.rank, self.file).cmp(&(other.rank, other.file))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };

        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            return Err(invalid());
        }

        let file = match chars[0] {
            'a'..='h' => chars[0] as i8 - 'a' as i8,
            'A'..='H' => chars[0] as i8 - 'A' as i8,
            _ => return Err(invalid()),
        };

        let rank = match chars[1] {
            '1'..='8' => chars[1] as i8 - '1' as i8,
            _ => return Err(invalid()),
        };

        Ok(Square::at(file, rank))
    }
}
