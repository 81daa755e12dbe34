//! Square attack queries.

use super::error::ThreatError;
use super::movegen::GenMode;
use super::state::Board;
use super::types::{Color, Square};

impl Board {
    /// True when any piece opposing `side` has `square` among its candidate
    /// destinations. Turn state is ignored; the scan asks what could reach
    /// the square, not whose move it is.
    #[must_use]
    pub fn is_threatened(&self, square: Square, side: Color) -> bool {
        Square::all().any(|from| {
            match self.piece_at(from) {
                Some((color, _)) if color != side => self
                    .pseudo_moves(from, GenMode::ThreatQuery)
                    .iter()
                    .any(|mv| mv.to == square),
                _ => false,
            }
        })
    }

    /// Whether `side`'s king stands on an attacked square.
    pub fn is_king_threatened(&self, side: Color) -> Result<bool, ThreatError> {
        let king = self
            .position
            .find_king(side)
            .ok_or(ThreatError::MissingKing { side })?;
        Ok(self.is_threatened(king, side))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::types::Piece;

    #[test]
    fn rook_threatens_along_open_lines_only() {
        let mut board = Board::empty();
        board.set_piece("d4".parse().unwrap(), Color::White, Piece::Rook);

        assert!(board.is_threatened("d8".parse().unwrap(), Color::Black));
        assert!(board.is_threatened("a4".parse().unwrap(), Color::Black));
        assert!(!board.is_threatened("e5".parse().unwrap(), Color::Black));

        // a blocker cuts the line beyond itself
        board.set_piece("d6".parse().unwrap(), Color::Black, Piece::Pawn);
        assert!(board.is_threatened("d6".parse().unwrap(), Color::Black));
        assert!(!board.is_threatened("d7".parse().unwrap(), Color::Black));
    }

    #[test]
    fn own_pieces_do_not_threaten_their_side() {
        let mut board = Board::empty();
        board.set_piece("d4".parse().unwrap(), Color::White, Piece::Queen);
        assert!(!board.is_threatened("d8".parse().unwrap(), Color::White));
        assert!(board.is_threatened("d8".parse().unwrap(), Color::Black));
    }

    #[test]
    fn pawn_threat_directions() {
        let mut board = Board::empty();
        board.set_piece("e4".parse().unwrap(), Color::White, Piece::Pawn);
        board.set_piece("d5".parse().unwrap(), Color::Black, Piece::Rook);
        board.set_piece("f5".parse().unwrap(), Color::Black, Piece::Rook);

        assert!(board.is_threatened("d5".parse().unwrap(), Color::Black));
        assert!(board.is_threatened("f5".parse().unwrap(), Color::Black));
        assert!(!board.is_threatened("e3".parse().unwrap(), Color::Black));
    }

    #[test]
    fn king_threat_reports_check() {
        let mut board = Board::empty();
        board.set_piece("e1".parse().unwrap(), Color::White, Piece::King);
        board.set_piece("e8".parse().unwrap(), Color::Black, Piece::King);
        assert!(!board.is_king_threatened(Color::White).unwrap());

        board.set_piece("e5".parse().unwrap(), Color::Black, Piece::Rook);
        assert!(board.is_king_threatened(Color::White).unwrap());
        assert!(!board.is_king_threatened(Color::Black).unwrap());
    }

    #[test]
    fn missing_king_is_an_error() {
        let board = Board::empty();
        assert_eq!(
            board.is_king_threatened(Color::White),
            Err(ThreatError::MissingKing { side: Color::White })
        );
    }
}
