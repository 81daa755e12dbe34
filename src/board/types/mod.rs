//! Core value types: squares, pieces, moves, castling rights.

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use moves::Move;
pub use piece::{Color, Piece};
pub use square::{File, Rank, Square};

pub(crate) use castling::right_for_char;
