//! Benchmarks for hand classification, the decision policy and dealing.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use preflop_trainer::preflop::{heuristic_strength, Card, HoleCards, TokenSet};
use preflop_trainer::{decide, Archetype, Charts, Choice, RangeToken, Trainer, TrainerConfig, Zone};

fn all_hands() -> Vec<HoleCards> {
    let mut hands = Vec::with_capacity(1326);
    for a in 0..52u8 {
        for b in (a + 1)..52 {
            hands.push(HoleCards::new(Card::from_id(a), Card::from_id(b)));
        }
    }
    hands
}

fn classify_benchmark(c: &mut Criterion) {
    let hands = all_hands();

    c.bench_function("classify_1326_hands", |b| {
        b.iter(|| {
            for hand in &hands {
                black_box(RangeToken::from_hand(hand));
                black_box(heuristic_strength(hand));
            }
        })
    });
}

fn decide_benchmark(c: &mut Criterion) {
    let hands = all_hands();
    let charts = Charts::standard().unwrap();

    c.bench_function("decide_all_zones_archetypes", |b| {
        b.iter(|| {
            for archetype in Archetype::ALL {
                for zone in Zone::ALL {
                    for hand in &hands {
                        black_box(decide(hand, zone, archetype, &charts, false));
                    }
                }
            }
        })
    });
}

fn notation_benchmark(c: &mut Criterion) {
    c.bench_function("parse_range_notation", |b| {
        b.iter(|| TokenSet::from_notation(black_box("22+, A2s+, K9s+, QTs+, JTs-54s, ATo+, KJo+")))
    });
}

fn session_benchmark(c: &mut Criterion) {
    c.bench_function("trainer_100_hands", |b| {
        b.iter(|| {
            let mut trainer = Trainer::new(TrainerConfig::default().with_seed(42)).unwrap();
            trainer.setup(9).unwrap();
            for _ in 0..100 {
                let action = trainer.advise(Archetype::Optimal).unwrap();
                trainer.submit_action(Choice::from(action)).unwrap();
                trainer.next_hand().unwrap();
            }
            black_box(trainer.stats())
        })
    });
}

criterion_group!(
    benches,
    classify_benchmark,
    decide_benchmark,
    notation_benchmark,
    session_benchmark
);
criterion_main!(benches);
