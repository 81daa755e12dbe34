//! A correctness-first chess rules engine.
//!
//! Provides board state, move generation with king-safety filtering,
//! castling with rights bookkeeping, threat queries, and FEN parsing.
//! Search, evaluation, en passant and promotion are out of scope.

pub mod board;

pub use board::{
    Board, BoardBuilder, CastlingRights, Color, FenError, Move, MoveError, Piece, Square,
    SquareError, ThreatError,
};
