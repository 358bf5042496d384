//! Move validation benchmarks
//!
//! Criterion benchmarks for parsing, validation and record replay.

use chess_record::record::replay;
use chess_record::Settings;
use chess_rules::{apply_move, is_legal_move, parse_move, GameState, Move, PromotionPiece, Square};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const GAME: [&str; 13] = [
    "e2e4", "e7e5", "d1e2", "d8e7", "e2e3", "e7e6", "b1c3", "g8f6", "f1c4", "d7d5", "c4d5",
    "f6d5", "c3d5",
];

fn game_moves() -> Vec<Move> {
    GAME.iter().filter_map(|text| parse_move(text).ok()).collect()
}

fn bench_parse_move(c: &mut Criterion) {
    c.bench_function("parse_move", |b| {
        b.iter(|| {
            for text in GAME {
                let _ = black_box(parse_move(black_box(text)));
            }
        })
    });
}

fn bench_validate_all_moves_starting(c: &mut Criterion) {
    let state = GameState::new();

    c.bench_function("validate_all_moves_starting_position", |b| {
        b.iter(|| {
            let mut legal = 0;
            for from in Square::all() {
                for to in Square::all() {
                    if is_legal_move(&state, Move::new(from, to)) {
                        legal += 1;
                    }
                }
            }
            black_box(legal)
        })
    });
}

fn bench_apply_move(c: &mut Criterion) {
    let state = GameState::new();
    let Ok(mv) = parse_move("e2e4") else {
        return;
    };

    c.bench_function("apply_move_e2e4", |b| {
        b.iter(|| {
            let mut next = state.clone();
            black_box(apply_move(&mut next, black_box(mv), &mut PromotionPiece::Queen))
        })
    });
}

fn bench_replay_game(c: &mut Criterion) {
    let moves = game_moves();
    let settings = Settings::default();

    c.bench_function("replay_short_game", |b| {
        b.iter(|| black_box(replay(black_box(&moves), &settings).is_ok()))
    });
}

criterion_group!(
    benches,
    bench_parse_move,
    bench_validate_all_moves_starting,
    bench_apply_move,
    bench_replay_game,
);
criterion_main!(benches);
