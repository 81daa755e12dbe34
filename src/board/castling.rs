//! Castling descriptors, the castling move rule and rights invalidation.

use super::movegen::{GenMode, Mover};
use super::state::{Board, Position};
use super::types::{Color, Move, Piece, Square};

/// One castle variant: where the king and rook start and land.
#[derive(Clone, Copy, Debug)]
pub(crate) struct CastleInfo {
    pub(crate) king_from: Square,
    pub(crate) king_to: Square,
    pub(crate) rook_from: Square,
    pub(crate) rook_to: Square,
    pub(crate) color: Color,
    pub(crate) kingside: bool,
}

/// All four castle variants. Files: king e, kingside rook h landing on f,
/// queenside rook a landing on d.
pub(crate) const CASTLES: [CastleInfo; 4] = [
    CastleInfo {
        king_from: Square::at(4, 0),
        king_to: Square::at(6, 0),
        rook_from: Square::at(7, 0),
        rook_to: Square::at(5, 0),
        color: Color::White,
        kingside: true,
    },
    CastleInfo {
        king_from: Square::at(4, 0),
        king_to: Square::at(2, 0),
        rook_from: Square::at(0, 0),
        rook_to: Square::at(3, 0),
        color: Color::White,
        kingside: false,
    },
    CastleInfo {
        king_from: Square::at(4, 7),
        king_to: Square::at(6, 7),
        rook_from: Square::at(7, 7),
        rook_to: Square::at(5, 7),
        color: Color::Black,
        kingside: true,
    },
    CastleInfo {
        king_from: Square::at(4, 7),
        king_to: Square::at(2, 7),
        rook_from: Square::at(0, 7),
        rook_to: Square::at(3, 7),
        color: Color::Black,
        kingside: false,
    },
];

/// The castle variant whose king displacement matches `mv`, if any. This is
/// how a two-file king move is recognized as castling when it is applied.
pub(crate) fn castle_for_king_move(color: Color, mv: Move) -> Option<&'static CastleInfo> {
    CASTLES
        .iter()
        .find(|c| c.color == color && c.king_from == mv.from && c.king_to == mv.to)
}

/// The squares strictly between the king's and rook's home squares.
fn squares_between(castle: &CastleInfo) -> impl Iterator<Item = Square> + '_ {
    let lo = castle.king_from.file_index().min(castle.rook_from.file_index());
    let hi = castle.king_from.file_index().max(castle.rook_from.file_index());
    let rank = castle.king_from.rank_index() as i8;
    (lo + 1..hi).map(move |file| Square::at(file as i8, rank))
}

/// Castling candidates for the king.
///
/// A variant is offered when the matching right remains, the rook sits on
/// its home square, every square between king and rook is empty, and the
/// king is not currently attacked. Whether the king would pass through or
/// land on an attacked square is left to the usual simulation filter.
pub(crate) struct CastlingMover;

impl Mover for CastlingMover {
    fn pseudo_moves(
        &self,
        board: &Board,
        (color, _): (Color, Piece),
        from: Square,
        mode: GenMode,
    ) -> Vec<Move> {
        // castling never captures, so threat scans can skip it; this also
        // keeps the attacked-king probe below from re-entering itself
        if mode == GenMode::ThreatQuery {
            return Vec::new();
        }

        let mut moves = Vec::new();
        for castle in &CASTLES {
            if castle.color != color || castle.king_from != from {
                continue;
            }
            if !board.castling_rights().has(color, castle.kingside) {
                continue;
            }
            if board.piece_at(castle.rook_from) != Some((color, Piece::Rook)) {
                continue;
            }
            if squares_between(castle).any(|sq| !board.is_empty(sq)) {
                continue;
            }
            if board.is_threatened(from, color) {
                continue;
            }
            moves.push(Move::new(from, castle.king_to));
        }
        moves
    }
}

/// Castling-rights invalidation, run after every applied move.
///
/// A king move drops both of its side's rights. A move that starts or ends
/// on a rook home square drops that corner's right, which covers the rook
/// moving away as well as the rook being captured where it stands.
pub(crate) struct RightsUpdater;

impl Mover for RightsUpdater {
    fn update(&self, position: &mut Position, (color, piece): (Color, Piece), mv: Move) {
        if position.castling.is_empty() {
            return;
        }

        if piece == Piece::King {
            if position.castling.has(color, true) || position.castling.has(color, false) {
                position.castling.remove(color, true);
                position.castling.remove(color, false);
                log::debug!("{color} king moved, both castling rights gone");
            }
        }

        for castle in &CASTLES {
            if mv.from == castle.rook_from || mv.to == castle.rook_from {
                if position.castling.has(castle.color, castle.kingside) {
                    position.castling.remove(castle.color, castle.kingside);
                    log::debug!(
                        "castling right lost for {} ({})",
                        castle.color,
                        if castle.kingside { "kingside" } else { "queenside" }
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn king_move_matches_castle_descriptor() {
        let castle = castle_for_king_move(Color::White, "e1g1".parse().unwrap()).unwrap();
        assert_eq!(castle.rook_from, "h1".parse().unwrap());
        assert_eq!(castle.rook_to, "f1".parse().unwrap());

        let castle = castle_for_king_move(Color::Black, "e8c8".parse().unwrap()).unwrap();
        assert_eq!(castle.rook_from, "a8".parse().unwrap());
        assert_eq!(castle.rook_to, "d8".parse().unwrap());

        // one-square king moves and wrong-color matches are not castles
        assert!(castle_for_king_move(Color::White, "e1f1".parse().unwrap()).is_none());
        assert!(castle_for_king_move(Color::Black, "e1g1".parse().unwrap()).is_none());
    }

    #[test]
    fn between_squares_per_variant() {
        let kingside: Vec<String> = squares_between(&CASTLES[0]).map(|s| s.to_string()).collect();
        assert_eq!(kingside, ["f1", "g1"]);

        let queenside: Vec<String> = squares_between(&CASTLES[1]).map(|s| s.to_string()).collect();
        assert_eq!(queenside, ["b1", "c1", "d1"]);
    }
}
