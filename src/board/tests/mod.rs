//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `basic.rs` - Move application, game flow, purity
//! - `castling.rs` - Castling legality and rights bookkeeping
//! - `threats.rs` - Threat detection, checks and pins
//! - `proptest.rs` - Property-based tests

mod basic;

use crate::board::{Board, Move, Square};
use std::collections::BTreeSet;

/// Legal moves from `from`, formatted for comparison against literals.
pub(crate) fn move_set(board: &Board, from: &str) -> BTreeSet<String> {
    board
        .moves_from(from.parse().unwrap())
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect()
}

pub(crate) fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(ToString::to_string).collect()
}

pub(crate) fn sq(text: &str) -> Square {
    text.parse().unwrap()
}

pub(crate) fn mv(text: &str) -> Move {
    text.parse().unwrap()
}
