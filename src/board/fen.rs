//! FEN-style position parsing and formatting.
//!
//! The accepted format is `<board>[ <turn>[ <castling>]]`. The board segment
//! is the standard 8-rank piece layout; turn and castling are optional and
//! default to white to move with no castling rights.

use std::str::FromStr;

use super::error::FenError;
use super::state::Board;
use super::types::{right_for_char, CastlingRights, Color, Piece, Square};

impl Board {
    /// Parse a position description.
    ///
    /// # Errors
    /// Returns a [`FenError`] describing the first structural violation
    /// found: wrong rank count, an overlong rank, an unknown piece letter,
    /// a bad turn or castling segment, or trailing segments.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let segments: Vec<&str> = fen.split_whitespace().collect();
        if segments.len() > 3 {
            return Err(FenError::TooManySegments {
                found: segments.len(),
            });
        }

        let mut board = Board::empty();
        parse_board_segment(&mut board, segments.first().copied().unwrap_or(""))?;

        board.position.turn = Some(match segments.get(1) {
            Some(turn) => parse_turn_segment(turn)?,
            None => Color::White,
        });

        if let Some(castling) = segments.get(2) {
            board.position.castling = parse_castling_segment(castling)?;
        }

        log::trace!("parsed position: {}", board.to_fen());
        Ok(board)
    }

    /// Format the position in the same notation [`Board::try_from_fen`]
    /// accepts. A board without turn tracking emits only the board segment.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut out = String::new();
        for rank in (0..8).rev() {
            if rank < 7 {
                out.push('/');
            }
            let mut run = 0;
            for file in 0..8 {
                match self.piece_at(Square::at(file, rank)) {
                    Some((color, piece)) => {
                        if run > 0 {
                            out.push(char::from_digit(run, 10).unwrap_or('0'));
                            run = 0;
                        }
                        out.push(piece.to_fen_char(color));
                    }
                    None => run += 1,
                }
            }
            if run > 0 {
                out.push(char::from_digit(run, 10).unwrap_or('0'));
            }
        }

        if let Some(turn) = self.turn() {
            out.push(' ');
            out.push(match turn {
                Color::White => 'w',
                Color::Black => 'b',
            });

            out.push(' ');
            let rights = self.castling_rights();
            if rights.is_empty() {
                out.push('-');
            } else {
                for (c, color, kingside) in [
                    ('K', Color::White, true),
                    ('Q', Color::White, false),
                    ('k', Color::Black, true),
                    ('q', Color::Black, false),
                ] {
                    if rights.has(color, kingside) {
                        out.push(c);
                    }
                }
            }
        }
        out
    }
}

fn parse_board_segment(board: &mut Board, segment: &str) -> Result<(), FenError> {
    let ranks: Vec<&str> = segment.split('/').filter(|r| !r.is_empty()).collect();
    if ranks.len() != 8 {
        return Err(FenError::BadRankCount { found: ranks.len() });
    }

    // descriptors run from rank 8 down to rank 1
    for (i, descriptor) in ranks.iter().enumerate() {
        let rank = 7 - i as i8;
        let mut file: i8 = 0;
        for c in descriptor.chars() {
            // only 1-8 are skip digits; '0' and '9' fall through and fail
            // as unrecognized piece letters
            if matches!(c, '1'..='8') {
                file += (c as u8 - b'0') as i8;
            } else {
                let color = if c.is_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let piece = Piece::from_char(c.to_ascii_lowercase())
                    .ok_or(FenError::InvalidPiece { piece: c })?;
                if file >= 8 {
                    return Err(FenError::TooManyFiles {
                        rank: rank as usize + 1,
                    });
                }
                board.set_piece(Square::at(file, rank), color, piece);
                file += 1;
            }
            if file > 8 {
                return Err(FenError::TooManyFiles {
                    rank: rank as usize + 1,
                });
            }
        }
    }
    Ok(())
}

fn parse_turn_segment(segment: &str) -> Result<Color, FenError> {
    match segment {
        "w" | "W" => Ok(Color::White),
        "b" | "B" => Ok(Color::Black),
        other => Err(FenError::InvalidSideToMove {
            found: other.to_string(),
        }),
    }
}

fn parse_castling_segment(segment: &str) -> Result<CastlingRights, FenError> {
    let mut rights = CastlingRights::none();
    if segment == "-" || segment.is_empty() {
        return Ok(rights);
    }
    if segment.chars().count() > 4 {
        return Err(FenError::TooManyCastlingEntries {
            found: segment.chars().count(),
        });
    }
    for c in segment.chars() {
        let (color, kingside) = right_for_char(c).ok_or(FenError::InvalidCastling { entry: c })?;
        if rights.has(color, kingside) {
            return Err(FenError::DuplicateCastling { entry: c });
        }
        rights.set(color, kingside);
    }
    Ok(rights)
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}
