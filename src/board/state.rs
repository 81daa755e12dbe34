//! Position storage and the board orchestrator.

use super::castling::castle_for_king_move;
use super::error::MoveError;
use super::movegen::movers_for;
use super::types::{CastlingRights, Color, Move, Piece, Square};

/// The full mutable position: 8x8 grid, side to move, remaining castling
/// rights. This is the unit copied when a candidate move is simulated, so it
/// stays a plain value type with no shared substructure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Position {
    /// `grid[rank][file]`; a square holds zero or one piece
    pub(crate) grid: [[Option<(Color, Piece)>; 8]; 8],
    /// `None` disables turn enforcement (raw-board mode)
    pub(crate) turn: Option<Color>,
    pub(crate) castling: CastlingRights,
}

impl Position {
    pub(crate) fn empty() -> Self {
        Position {
            grid: [[None; 8]; 8],
            turn: None,
            castling: CastlingRights::none(),
        }
    }

    #[inline]
    pub(crate) fn get(&self, sq: Square) -> Option<(Color, Piece)> {
        self.grid[sq.rank_index()][sq.file_index()]
    }

    #[inline]
    pub(crate) fn set(&mut self, sq: Square, color: Color, piece: Piece) {
        self.grid[sq.rank_index()][sq.file_index()] = Some((color, piece));
    }

    #[inline]
    pub(crate) fn clear(&mut self, sq: Square) {
        self.grid[sq.rank_index()][sq.file_index()] = None;
    }

    /// Locate the unique square holding `side`'s king.
    pub(crate) fn find_king(&self, side: Color) -> Option<Square> {
        Square::all().find(|&sq| self.get(sq) == Some((side, Piece::King)))
    }

    /// Mechanically apply a move: clear the source, overwrite the destination
    /// (an implicit capture), and shift the rook when the king displacement
    /// matches a castling descriptor. No validation, no update handlers.
    pub(crate) fn apply(&mut self, mv: Move) {
        let Some((color, piece)) = self.get(mv.from) else {
            return;
        };
        self.clear(mv.from);
        self.set(mv.to, color, piece);

        if piece == Piece::King {
            if let Some(castle) = castle_for_king_move(color, mv) {
                if self.get(castle.rook_from) == Some((color, Piece::Rook)) {
                    self.clear(castle.rook_from);
                    self.set(castle.rook_to, color, Piece::Rook);
                }
            }
        }
    }

    pub(crate) fn flip_turn(&mut self) {
        if let Some(turn) = self.turn {
            self.turn = Some(turn.opponent());
        }
    }
}

/// A chess board with rules attached.
///
/// Owns the position and sequences move generation, legality filtering and
/// post-move state updates. Construct one with [`Board::new`] for the standard
/// initial position, [`Board::empty`] for a raw board, or from FEN text.
///
/// # Example
/// ```
/// use chess_rules::board::Board;
///
/// let mut board = Board::new();
/// board.make_move("e2e4".parse().unwrap()).unwrap();
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) position: Position,
}

impl Board {
    /// Create a board with the standard initial position, white to move and
    /// all castling rights intact.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for color in Color::BOTH {
            let home = color.back_rank();
            let pawns = color.pawn_start_rank();
            for (file, &piece) in back_rank.iter().enumerate() {
                let file = file as i8;
                board.set_piece(Square::at(file, home.0), color, piece);
                board.set_piece(Square::at(file, pawns.0), color, Piece::Pawn);
            }
        }
        board.position.turn = Some(Color::White);
        board.position.castling = CastlingRights::all();
        board
    }

    /// Create an empty board with no turn tracking and no castling rights.
    ///
    /// In this raw mode any side may move at any time, which is useful for
    /// setting up arbitrary positions in tests.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            position: Position::empty(),
        }
    }

    /// The piece on `sq`, if any.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.position.get(sq)
    }

    /// True when `sq` holds no piece.
    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.position.get(sq).is_none()
    }

    /// Place a piece, replacing any occupant. Intended for position setup.
    pub fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.position.set(sq, color, piece);
    }

    /// Remove the piece on `sq`, if any. Intended for position setup.
    pub fn clear_square(&mut self, sq: Square) {
        self.position.clear(sq);
    }

    /// The side to move, or `None` when turn enforcement is off.
    #[inline]
    #[must_use]
    pub fn turn(&self) -> Option<Color> {
        self.position.turn
    }

    /// The remaining castling rights.
    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.position.castling
    }

    /// Validate and apply a move.
    ///
    /// Validation rejects an empty source square, a piece of the side not on
    /// turn (when turn is tracked), and any move outside the legal move set.
    /// On success the position is updated in place and the update handlers
    /// run in fixed order: turn flip, then castling-rights invalidation.
    pub fn make_move(&mut self, mv: Move) -> Result<(), MoveError> {
        let (color, piece) = self
            .piece_at(mv.from)
            .ok_or(MoveError::EmptySquare { square: mv.from })?;

        if let Some(turn) = self.position.turn {
            if color != turn {
                return Err(MoveError::WrongSide { square: mv.from });
            }
        }

        if !self.is_legal_move(mv.from, mv)? {
            return Err(MoveError::NotLegal { mv });
        }

        self.position.apply(mv);
        log::debug!("applied {mv}: {color} {piece:?}");

        for mover in movers_for(piece) {
            mover.update(&mut self.position, (color, piece), mv);
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
