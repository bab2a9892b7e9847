use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use sweepkit_core::*;

fn bench_placement(c: &mut Criterion) {
    let config = Difficulty::Hard.config();
    let mut group = c.benchmark_group("placement_hard");

    for policy in [PlacementPolicy::RejectionSampling, PlacementPolicy::Shuffle] {
        let mut generator = RandomMineGenerator::new(0x5eed, policy);
        group.bench_function(format!("{policy:?}"), |b| {
            b.iter(|| {
                let mut board = Board::with_config(config).unwrap();
                generator.place_mines(&mut board, black_box((8, 15))).unwrap();
                board
            })
        });
    }

    group.finish();
}

fn bench_first_reveal(c: &mut Criterion) {
    c.bench_function("first_reveal_hard", |b| {
        let mut seed = 0;
        b.iter(|| {
            seed += 1;
            let options = GameOptions {
                seed: Some(seed),
                placement: PlacementPolicy::RejectionSampling,
            };
            let mut game = Game::with_options(Difficulty::Hard, options);
            game.reveal(black_box((8, 15))).unwrap()
        })
    });
}

criterion_group!(benches, bench_placement, bench_first_reveal);
criterion_main!(benches);
