use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

use ordtree::{AvlSet, BstSet};

const N: usize = 100_000;

pub fn benchmarks(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let values: Vec<i32> = (1..=N).map(|_| rng.gen()).collect();

    c.bench_function("avl_insert", |b| {
        let mut set = AvlSet::new();
        b.iter(|| {
            for value in &values {
                set.insert(*value);
            }
        })
    });

    c.bench_function("bst_insert", |b| {
        let mut set = BstSet::new();
        b.iter(|| {
            for value in &values[..N / 10] {
                set.insert(*value);
            }
        })
    });

    let avl: AvlSet<i32> = values.iter().copied().collect();

    c.bench_function("avl_floor", |b| {
        b.iter(|| {
            for value in &values {
                black_box(avl.floor(value));
            }
        })
    });

    c.bench_function("avl_contains", |b| {
        b.iter(|| {
            for value in &values[..100] {
                black_box(avl.contains(value));
            }
        })
    });

    c.bench_function("avl_iter", |b| {
        b.iter(|| {
            for key in &avl {
                black_box(key);
            }
        })
    });

    c.bench_function("avl_remove", |b| {
        let mut set = avl.clone();
        b.iter(|| {
            for value in &values {
                set.remove(value);
            }
        })
    });
}

criterion_group!(benches, benchmarks);
criterion_main!(benches);
