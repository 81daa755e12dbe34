//! Benchmarks for move generation and threat scanning.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chess_rules::board::{Board, Color, Square};

fn all_legal_moves(board: &Board) -> usize {
    Square::all()
        .map(|from| board.moves_from(from).map(|m| m.len()).unwrap_or(0))
        .sum()
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let startpos = Board::new();
    group.bench_function("startpos", |b| {
        b.iter(|| black_box(all_legal_moves(&startpos)))
    });

    let middlegame: Board = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq"
        .parse()
        .unwrap();
    group.bench_function("middlegame", |b| {
        b.iter(|| black_box(all_legal_moves(&middlegame)))
    });

    group.finish();
}

fn bench_threat_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("threats");

    let board: Board = "r3k2r/ppp2ppp/3p4/1B2p3/8/6b1/PPPQP1PP/R3K2R w KQkq"
        .parse()
        .unwrap();

    group.bench_function("king_check", |b| {
        b.iter(|| black_box(board.is_king_threatened(Color::White).unwrap()))
    });

    group.bench_function("full_board", |b| {
        b.iter(|| {
            Square::all()
                .filter(|&sq| board.is_threatened(sq, Color::White))
                .count()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_movegen, bench_threat_scan);
criterion_main!(benches);
