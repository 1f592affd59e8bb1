use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use click_chess::game_state::chess_rules::STARTING_LAYOUT;
use click_chess::game_state::chess_types::square_at;
use click_chess::game_state::game_state::GameState;
use click_chess::move_generation::legal_move_generator::{
    legal_destinations, legal_moves_for_side,
};

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    layout: &'static str,
    expected_moves: usize,
}

const CASES_QUICK: &[BenchCase] = &[BenchCase {
    name: "start",
    layout: STARTING_LAYOUT,
    expected_moves: 26,
}];

const CASES_STANDARD: &[BenchCase] = &[
    BenchCase {
        name: "start",
        layout: STARTING_LAYOUT,
        expected_moves: 26,
    },
    BenchCase {
        name: "lone_queen",
        layout: "8/8/8/3q4/8/8/8/8 w",
        expected_moves: 28,
    },
    BenchCase {
        name: "open_sliders",
        layout: "8/8/8/8/8/8/8/r1b1qb1r w",
        expected_moves: 50,
    },
];

fn selected_cases() -> &'static [BenchCase] {
    match std::env::var("CLICK_CHESS_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => CASES_STANDARD,
        _ => CASES_QUICK,
    }
}

fn bench_legal_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_moves_for_side");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    for case in selected_cases() {
        let game = GameState::from_layout(case.layout).expect("benchmark layout should parse");

        // Correctness guard before benchmarking.
        let warmup = legal_moves_for_side(&game);
        assert_eq!(warmup.len(), case.expected_moves, "move count mismatch for {}", case.name);

        group.throughput(Throughput::Elements(case.expected_moves as u64));
        group.bench_with_input(BenchmarkId::from_parameter(case.name), &game, |b, game| {
            b.iter(|| black_box(legal_moves_for_side(black_box(game))).len());
        });
    }

    group.finish();
}

fn bench_highlight(c: &mut Criterion) {
    let game = GameState::new_game();
    let b1 = square_at(7, 1);

    c.bench_function("legal_destinations_start_knight", |b| {
        b.iter(|| legal_destinations(black_box(&game), black_box(b1)));
    });
}

criterion_group!(legality_benches, bench_legal_moves, bench_highlight);
criterion_main!(legality_benches);
