//! Move application and board-query behavior over full positions.

use super::{move_set, mv, set, sq};
use crate::board::{Board, Color, MoveError, Piece, Square};

fn piece_count(board: &Board) -> usize {
    Square::all().filter(|&s| board.piece_at(s).is_some()).count()
}

#[test]
fn short_opening_sequence() {
    let mut board = Board::new();
    for m in ["e2e4", "e7e5", "g1f3", "b8c6", "f1b5"] {
        board.make_move(mv(m)).unwrap();
    }

    assert_eq!(board.piece_at(sq("e4")), Some((Color::White, Piece::Pawn)));
    assert_eq!(board.piece_at(sq("b5")), Some((Color::White, Piece::Bishop)));
    assert_eq!(board.piece_at(sq("c6")), Some((Color::Black, Piece::Knight)));
    assert!(board.is_empty(sq("e2")));
    assert_eq!(board.turn(), Some(Color::Black));
    assert_eq!(piece_count(&board), 32);
}

#[test]
fn captures_reduce_piece_count_by_one() {
    let mut board = Board::new();
    for m in ["e2e4", "d7d5", "e4d5"] {
        board.make_move(mv(m)).unwrap();
    }
    assert_eq!(piece_count(&board), 31);
    assert_eq!(board.piece_at(sq("d5")), Some((Color::White, Piece::Pawn)));
}

#[test]
fn queries_do_not_mutate_the_board() {
    let board: Board = "r3k2r/ppp2ppp/3p4/1B2p3/8/6b1/PPPQP1PP/R3K2R w KQkq"
        .parse()
        .unwrap();
    let before = board.clone();

    for from in Square::all() {
        let _ = board.moves_from(from);
    }
    for target in Square::all() {
        for side in Color::BOTH {
            let _ = board.is_threatened(target, side);
        }
    }
    let _ = board.is_king_threatened(Color::White);

    assert_eq!(board, before);
}

#[test]
fn rejected_moves_leave_the_board_untouched() {
    let mut board = Board::new();
    let before = board.clone();

    assert!(board.make_move(mv("e2e5")).is_err());
    assert!(board.make_move(mv("e7e5")).is_err());
    assert!(board.make_move(mv("d4d5")).is_err());

    assert_eq!(board, before);
}

#[test]
fn move_into_check_is_rejected() {
    let board: Board = "4k3/8/8/8/8/8/4r3/3K4 w -".parse().unwrap();

    // the undefended rook can be captured; every other escape square on
    // the rook's rank or file is off limits
    assert_eq!(move_set(&board, "d1"), set(&["d1c1", "d1e2"]));

    let mut board = board;
    assert_eq!(
        board.make_move(mv("d1e1")),
        Err(MoveError::NotLegal { mv: mv("d1e1") })
    );
}

#[test]
fn check_must_be_resolved() {
    // white king in check from the e8 rook; the a2 rook can interpose on e2
    let board: Board = "4r3/8/8/8/8/8/R7/4K2k w -".parse().unwrap();

    assert!(board.is_king_threatened(Color::White).unwrap());
    assert_eq!(move_set(&board, "a2"), set(&["a2e2"]));
    assert_eq!(move_set(&board, "e1"), set(&["e1d1", "e1d2", "e1f2", "e1f1"]));
}

#[test]
fn moving_a_side_with_no_king_reports_missing_king() {
    let mut board = Board::empty();
    board.set_piece(sq("d4"), Color::White, Piece::Rook);
    board.set_piece(sq("e8"), Color::Black, Piece::King);

    assert_eq!(
        board.make_move(mv("d4d5")),
        Err(MoveError::MissingKing { side: Color::White })
    );
}

#[test]
fn fen_round_trip_after_play() {
    let mut board = Board::new();
    for m in ["d2d4", "g8f6", "c2c4", "e7e6", "b1c3"] {
        board.make_move(mv(m)).unwrap();
    }
    let reparsed: Board = board.to_fen().parse().unwrap();
    assert_eq!(reparsed, board);
}
