//! Benchmarks pour la recherche de motifs

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use motif_core::{most_probable_kmers, GibbsMode, MotifSearch, Profile, RandomSampler, SearchConfig, SequenceSet};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

/// Génère `t` séquences aléatoires de longueur `len` (seed fixe)
fn random_dna(t: usize, len: usize) -> SequenceSet {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let lines: Vec<String> = (0..t)
        .map(|_| (0..len).map(|_| b"ACGT"[rng.gen_range(0..4)] as char).collect())
        .collect();
    SequenceSet::from_lines(lines).unwrap()
}

fn benchmark_engine(c: &mut Criterion) {
    let dna = random_dna(20, 500);
    let mut sampler = RandomSampler::seeded(1);
    let motifs = sampler.random_kmer_set(&dna, 10).unwrap();

    let mut group = c.benchmark_group("Engine");

    group.bench_function("build_profile", |b| {
        b.iter(|| Profile::build(black_box(motifs.as_slice())).unwrap());
    });

    group.bench_function("most_probable_kmers", |b| {
        let profile = motifs.profile().unwrap();
        b.iter(|| most_probable_kmers(black_box(&dna), &profile).unwrap());
    });

    group.bench_function("score", |b| {
        b.iter(|| black_box(&motifs).score().unwrap());
    });

    group.finish();
}

fn benchmark_searches(c: &mut Criterion) {
    let dna = random_dna(20, 500);

    let mut group = c.benchmark_group("Search Comparison");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(10);

    let configs = [
        ("randomized", SearchConfig::randomized()),
        ("gibbs_fresh_draw", SearchConfig::gibbs()),
        (
            "gibbs_carry_forward",
            SearchConfig::gibbs().with_gibbs_mode(GibbsMode::CarryForward),
        ),
    ];

    for (name, config) in configs {
        group.bench_function(name, |b| {
            let mut search = MotifSearch::new(config.clone().with_seed(7)).unwrap();
            b.iter(|| search.run(black_box(&dna)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_engine, benchmark_searches);
criterion_main!(benches);
