//! Pseudo-legal move generation and legality filtering.
//!
//! Each piece type maps to a list of movers through a runtime dispatch table.
//! A mover contributes candidate moves from a square and, after a move is
//! applied, its share of the state update (turn flip, castling bookkeeping).

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::castling::{CastlingMover, RightsUpdater};
use super::error::ThreatError;
use super::state::{Board, Position};
use super::types::{Color, Move, Piece, Square};

/// Why moves are being generated.
///
/// Threat queries must not re-enter the king-safety filter (that would ask
/// "is the king attacked" for yet another hypothetical position, without end)
/// and never need castling candidates, since castling cannot capture. The
/// mode is threaded explicitly through the generation call chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum GenMode {
    /// Candidates for actual play or display; king safety is enforced.
    Play,
    /// Candidates only feed an is-this-square-attacked scan.
    ThreatQuery,
}

/// A movement rule plus its post-move state update.
pub(crate) trait Mover: Sync {
    /// Candidate moves for `piece` standing on `from`, ignoring king safety.
    fn pseudo_moves(
        &self,
        _board: &Board,
        _piece: (Color, Piece),
        _from: Square,
        _mode: GenMode,
    ) -> Vec<Move> {
        Vec::new()
    }

    /// Adjust position state after `mv` has been applied.
    fn update(&self, _position: &mut Position, _piece: (Color, Piece), _mv: Move) {}
}

#[derive(Clone, Copy)]
enum StepLimit {
    Once,
    Unlimited,
}

/// Step directions and limit for the directional pieces. Pawns get an empty
/// rule here; their movement is asymmetric and handled by dedicated movers.
struct StepRule {
    steps: &'static [(i8, i8)],
    limit: StepLimit,
}

const ORTHOGONALS: [(i8, i8); 4] = [(0, 1), (0, -1), (-1, 0), (1, 0)];
const DIAGONALS: [(i8, i8); 4] = [(-1, 1), (1, 1), (-1, -1), (1, -1)];
const COMPASS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (1, 1),
    (-1, -1),
    (1, -1),
];
const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (2, -1),
    (1, -2),
    (2, 1),
    (1, 2),
    (-2, -1),
    (-1, -2),
    (-2, 1),
    (-1, 2),
];

const fn step_rule(piece: Piece) -> StepRule {
    match piece {
        Piece::Pawn => StepRule {
            steps: &[],
            limit: StepLimit::Once,
        },
        Piece::Knight => StepRule {
            steps: &KNIGHT_JUMPS,
            limit: StepLimit::Once,
        },
        Piece::Bishop => StepRule {
            steps: &DIAGONALS,
            limit: StepLimit::Unlimited,
        },
        Piece::Rook => StepRule {
            steps: &ORTHOGONALS,
            limit: StepLimit::Unlimited,
        },
        Piece::Queen => StepRule {
            steps: &COMPASS,
            limit: StepLimit::Unlimited,
        },
        Piece::King => StepRule {
            steps: &COMPASS,
            limit: StepLimit::Once,
        },
    }
}

/// Directional stepping shared by every piece except the pawn: walk each
/// direction until the board edge, a same-side piece (excluded) or an
/// opposing piece (included as a capture, then stop).
struct StepMover;

impl Mover for StepMover {
    fn pseudo_moves(
        &self,
        board: &Board,
        (color, piece): (Color, Piece),
        from: Square,
        _mode: GenMode,
    ) -> Vec<Move> {
        let rule = step_rule(piece);
        let max_steps = match rule.limit {
            StepLimit::Once => 1,
            StepLimit::Unlimited => 7,
        };

        let mut moves = Vec::new();
        for &(df, dr) in rule.steps {
            let mut cur = from;
            for _ in 0..max_steps {
                let Some(next) = cur.offset(df, dr) else {
                    break;
                };
                match board.piece_at(next) {
                    Some((occupant, _)) if occupant == color => break,
                    Some(_) => {
                        moves.push(Move::new(from, next));
                        break;
                    }
                    None => {
                        moves.push(Move::new(from, next));
                        cur = next;
                    }
                }
            }
        }
        moves
    }
}

/// Pawn forward steps: one square onto an empty square, plus the two-square
/// advance from the starting rank when both squares ahead are empty.
struct PawnAdvanceMover;

impl Mover for PawnAdvanceMover {
    fn pseudo_moves(
        &self,
        board: &Board,
        (color, _): (Color, Piece),
        from: Square,
        _mode: GenMode,
    ) -> Vec<Move> {
        let mut moves = Vec::new();
        let dir = color.pawn_direction();

        if let Some(one) = from.offset(0, dir) {
            if board.is_empty(one) {
                moves.push(Move::new(from, one));
                if from.rank() == color.pawn_start_rank() {
                    if let Some(two) = one.offset(0, dir) {
                        if board.is_empty(two) {
                            moves.push(Move::new(from, two));
                        }
                    }
                }
            }
        }
        moves
    }
}

/// Pawn diagonal captures, only onto squares held by an opposing piece.
struct PawnCaptureMover;

impl Mover for PawnCaptureMover {
    fn pseudo_moves(
        &self,
        board: &Board,
        (color, _): (Color, Piece),
        from: Square,
        _mode: GenMode,
    ) -> Vec<Move> {
        let mut moves = Vec::new();
        let dir = color.pawn_direction();

        for df in [-1, 1] {
            if let Some(to) = from.offset(df, dir) {
                if let Some((occupant, _)) = board.piece_at(to) {
                    if occupant != color {
                        moves.push(Move::new(from, to));
                    }
                }
            }
        }
        moves
    }
}

/// Turn flip, applied after every move of every piece type.
struct TurnUpdater;

impl Mover for TurnUpdater {
    fn update(&self, position: &mut Position, _piece: (Color, Piece), _mv: Move) {
        position.flip_turn();
    }
}

static STEP_MOVER: StepMover = StepMover;
static PAWN_ADVANCE: PawnAdvanceMover = PawnAdvanceMover;
static PAWN_CAPTURE: PawnCaptureMover = PawnCaptureMover;
static CASTLING_MOVER: CastlingMover = CastlingMover;
static TURN_UPDATER: TurnUpdater = TurnUpdater;
static RIGHTS_UPDATER: RightsUpdater = RightsUpdater;

static MOVER_TABLE: Lazy<HashMap<Piece, Vec<&'static dyn Mover>>> = Lazy::new(|| {
    let mut table: HashMap<Piece, Vec<&'static dyn Mover>> = HashMap::new();
    for piece in Piece::ALL {
        let mut movers: Vec<&'static dyn Mover> = vec![&STEP_MOVER];
        if piece == Piece::Pawn {
            movers.push(&PAWN_ADVANCE);
            movers.push(&PAWN_CAPTURE);
        }
        if piece == Piece::King {
            movers.push(&CASTLING_MOVER);
        }
        // updaters run in registration order: turn flip before rights
        movers.push(&TURN_UPDATER);
        movers.push(&RIGHTS_UPDATER);
        table.insert(piece, movers);
    }
    table
});

/// The movers registered for a piece type.
pub(crate) fn movers_for(piece: Piece) -> &'static [&'static dyn Mover] {
    MOVER_TABLE[&piece].as_slice()
}

impl Board {
    /// Candidate moves from `from` without king-safety filtering.
    pub(crate) fn pseudo_moves(&self, from: Square, mode: GenMode) -> Vec<Move> {
        let Some(piece) = self.piece_at(from) else {
            return Vec::new();
        };
        let mut moves = Vec::new();
        for mover in movers_for(piece.1) {
            moves.extend(mover.pseudo_moves(self, piece, from, mode));
        }
        moves
    }

    /// Legal moves for the piece on `from`; empty when the square is empty.
    ///
    /// Every pseudo-legal candidate is simulated on a copy of the position
    /// and discarded if it would leave the moving side's own king attacked.
    /// A pinned piece therefore generates a constrained (possibly empty)
    /// move set here while still contributing its full coverage to threat
    /// scans.
    pub fn moves_from(&self, from: Square) -> Result<Vec<Move>, ThreatError> {
        let Some((color, _)) = self.piece_at(from) else {
            return Ok(Vec::new());
        };

        let candidates = self.pseudo_moves(from, GenMode::Play);
        let mut legal = Vec::with_capacity(candidates.len());
        for mv in candidates {
            let mut probe = self.clone();
            probe.position.apply(mv);
            if !probe.is_king_threatened(color)? {
                legal.push(mv);
            }
        }
        Ok(legal)
    }

    /// True iff `mv` is in the legal move set of the piece on `from`.
    pub fn is_legal_move(&self, from: Square, mv: Move) -> Result<bool, ThreatError> {
        Ok(self.moves_from(from)?.contains(&mv))
    }
}
