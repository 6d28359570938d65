use criterion::{Criterion, criterion_group, criterion_main};
use neontac_core::{CellIndex, GameEngine};
use std::hint::black_box;

const DRAW: [CellIndex; 9] = [0, 1, 2, 4, 3, 5, 7, 6, 8];
const QUICK_WIN: [CellIndex; 5] = [0, 3, 1, 4, 2];

fn play_out(moves: &[CellIndex]) -> GameEngine {
    let mut engine = GameEngine::new();
    for &index in moves {
        let _ = engine.apply_move(black_box(index));
    }
    engine
}

fn bench_games(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_game");
    group.bench_function("draw", |b| b.iter(|| play_out(&DRAW)));
    group.bench_function("quick_win", |b| b.iter(|| play_out(&QUICK_WIN)));
    group.finish();
}

criterion_group!(benches, bench_games);
criterion_main!(benches);
