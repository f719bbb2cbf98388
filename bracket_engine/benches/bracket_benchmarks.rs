use bracket_engine::bracket::{
    Match, Player, apply_result, compute_progress, generate_bracket, playable_matches,
};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};

fn create_players(n: u32) -> Vec<Player> {
    (1..=n)
        .map(|i| Player::new(format!("player{i}"), format!("Player {i}"), i))
        .collect()
}

/// Play a bracket to completion with seeded random, never tied scores
fn play_out(mut matches: Vec<Match>, rng: &mut StdRng) -> Vec<Match> {
    loop {
        let next = match playable_matches(&matches).first() {
            Some(m) => m.id.clone(),
            None => return matches,
        };
        let a = rng.random_range(0..21);
        let b = (a + rng.random_range(1..21)) % 21;
        matches = apply_result(&matches, &next, a, b).unwrap().updated_matches;
    }
}

/// Benchmark full bracket generation
fn bench_generate_bracket(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_bracket");

    for n_players in [64, 256].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_players", n_players)),
            n_players,
            |b, &n| {
                let players = create_players(n);
                b.iter(|| generate_bracket(&players, "bench").unwrap());
            },
        );
    }

    group.finish();
}

/// Benchmark a single result on a fresh bracket
fn bench_apply_first_result(c: &mut Criterion) {
    let matches = generate_bracket(&create_players(256), "bench").unwrap();

    c.bench_function("apply_first_result_256_players", |b| {
        b.iter(|| apply_result(&matches, "bench_main_r1_0", 11, 7).unwrap());
    });
}

/// Benchmark playing every match until the grand final is decided
fn bench_full_propagation(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_propagation");
    group.sample_size(10);

    for n_players in [64, 256].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_players", n_players)),
            n_players,
            |b, &n| {
                b.iter_batched(
                    || {
                        let matches = generate_bracket(&create_players(n), "bench").unwrap();
                        (matches, StdRng::seed_from_u64(7))
                    },
                    |(matches, mut rng)| play_out(matches, &mut rng),
                    criterion::BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

/// Benchmark progress over a half-played bracket
fn bench_compute_progress(c: &mut Criterion) {
    let mut matches = generate_bracket(&create_players(256), "bench").unwrap();
    for slot in 0..128 {
        let id = format!("bench_main_r1_{slot}");
        matches = apply_result(&matches, &id, 3, 1).unwrap().updated_matches;
    }

    c.bench_function("compute_progress_256_players", |b| {
        b.iter(|| compute_progress(&matches));
    });
}

criterion_group!(
    generation,
    bench_generate_bracket,
);

criterion_group!(
    propagation,
    bench_apply_first_result,
    bench_full_propagation,
    bench_compute_progress,
);

criterion_main!(generation, propagation);
