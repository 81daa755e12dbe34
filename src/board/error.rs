//! Error types for board operations.
//!
//! All errors are raised synchronously at the point of detection and never
//! retried internally; recovery policy belongs to the caller.

use std::fmt;

use super::types::{Color, Move, Square};

/// Error type for square notation failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Text is not a file letter a-h/A-H followed by a rank digit 1-8
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Board segment does not describe exactly 8 ranks
    BadRankCount { found: usize },
    /// A rank descriptor accounts for more than 8 files
    TooManyFiles { rank: usize },
    /// Unrecognized piece character in the board segment
    InvalidPiece { piece: char },
    /// Turn segment is not a single 'w' or 'b'
    InvalidSideToMove { found: String },
    /// Castling character outside KQkq
    InvalidCastling { entry: char },
    /// Castling character listed twice
    DuplicateCastling { entry: char },
    /// Castling segment longer than 4 characters
    TooManyCastlingEntries { found: usize },
    /// More than three whitespace-separated segments
    TooManySegments { found: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::BadRankCount { found } => {
                write!(f, "FEN board must have 8 ranks, found {found}")
            }
            FenError::TooManyFiles { rank } => {
                write!(f, "FEN rank {rank} describes more than 8 files")
            }
            FenError::InvalidPiece { piece } => {
                write!(f, "Invalid piece character '{piece}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidCastling { entry } => {
                write!(f, "Invalid castling character '{entry}' in FEN")
            }
            FenError::DuplicateCastling { entry } => {
                write!(f, "Duplicate castling character '{entry}' in FEN")
            }
            FenError::TooManyCastlingEntries { found } => {
                write!(f, "FEN castling segment has {found} entries, at most 4 allowed")
            }
            FenError::TooManySegments { found } => {
                write!(f, "FEN has {found} segments, at most 3 allowed")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for king-threat queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreatError {
    /// The queried side has no king on the board; the position violates the
    /// engine's basic precondition
    MissingKing { side: Color },
}

impl fmt::Display for ThreatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThreatError::MissingKing { side } => {
                write!(f, "{side} has no king on the board")
            }
        }
    }
}

impl std::error::Error for ThreatError {}

/// Error type for rejected moves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The source square holds no piece
    EmptySquare { square: Square },
    /// The source piece belongs to the side not on turn
    WrongSide { square: Square },
    /// The move is not in the legal move set of the source square
    NotLegal { mv: Move },
    /// The moving side has no king to keep safe
    MissingKing { side: Color },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::EmptySquare { square } => {
                write!(f, "No piece on {square} to move")
            }
            MoveError::WrongSide { square } => {
                write!(f, "Piece on {square} does not belong to the side on turn")
            }
            MoveError::NotLegal { mv } => {
                write!(f, "Move {mv} is not legal")
            }
            MoveError::MissingKing { side } => {
                write!(f, "{side} has no king on the board")
            }
        }
    }
}

impl std::error::Error for MoveError {}

impl From<ThreatError> for MoveError {
    fn from(err: ThreatError) -> Self {
        match err {
            ThreatError::MissingKing { side } => MoveError::MissingKing { side },
        }
    }
}
