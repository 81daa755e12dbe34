//! Chess board representation and rules.
//!
//! Implements piece movement, legality filtering against king safety,
//! castling with rights bookkeeping, and FEN-style position parsing.
//!
//! # Example
//! ```
//! use chess_rules::board::Board;
//!
//! let board = Board::new();
//! let moves = board.moves_from("b1".parse().unwrap()).unwrap();
//! assert_eq!(moves.len(), 2);
//! ```

mod builder;
mod castling;
mod error;
mod fen;
mod movegen;
mod state;
mod threats;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{FenError, MoveError, SquareError, ThreatError};
pub use state::Board;
pub use types::{CastlingRights, Color, File, Move, Piece, Rank, Square};
