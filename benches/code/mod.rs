use criterion::{criterion_group, BenchmarkId, Criterion};
use itertools::kmerge;
use rand::prelude::*;
use seq_collate::{from_iter, Builder};

fn sorted_runs(rng: &mut StdRng, n_runs: usize, run_len: usize) -> Vec<Vec<u64>> {
    (0..n_runs)
        .map(|_| {
            let mut run: Vec<u64> = (&mut *rng).random_iter().take(run_len).collect();
            run.sort_unstable();
            run
        })
        .collect()
}

fn bench_collate(c: &mut Criterion) {
    let input_counts = [2_usize, 8, 32, 128, 512];
    let n_els = 1_usize << 18;
    let mut rng = StdRng::seed_from_u64(0);

    let mut group = c.benchmark_group("Sorted runs VS Itertools");
    for n_inputs in input_counts {
        let runs = sorted_runs(&mut rng, n_inputs, n_els / n_inputs);
        group.bench_function(BenchmarkId::new("SeqCollate", n_inputs), |b| {
            b.iter(|| {
                Builder::new(runs.iter().map(|run| from_iter(run.iter().copied())))
                    .build()
                    .try_into_vec()
                    .unwrap()
            });
        });
        group.bench_function(BenchmarkId::new("Itertools kmerge", n_inputs), |b| {
            b.iter(|| {
                kmerge(runs.iter().map(|run| run.iter().copied())).collect::<Vec<_>>()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_collate);
