//! Benchmarks for the greedy cargo packer.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ferry_stow::{check_fitment, pack_items, Container};
use ferry_stow_core::{Dimensions, UnplacedItem};

fn mixed_batch(count: i64) -> Vec<UnplacedItem> {
    (0..count)
        .map(|i| {
            let dims = Dimensions::new(
                1.0 + (i % 3) as f64,
                1.0 + (i % 2) as f64,
                2.0 + (i % 4) as f64,
            );
            UnplacedItem::new(i, "vehicle", dims, 1.0)
        })
        .collect()
}

fn packer_benchmark(c: &mut Criterion) {
    let ferry = Container::default();
    let batch = mixed_batch(60);

    c.bench_function("pack_60_mixed_items", |b| {
        b.iter(|| {
            let outcome = pack_items(black_box(&ferry), black_box(&batch), &[]);
            black_box(outcome)
        })
    });

    let loaded = pack_items(&ferry, &batch, &[]).newly_placed;
    let candidate = UnplacedItem::new(1000, "vehicle", Dimensions::new(2.0, 2.0, 4.0), 1.0);

    c.bench_function("fitment_on_loaded_deck", |b| {
        b.iter(|| {
            let result = check_fitment(black_box(&ferry), black_box(&candidate), &loaded);
            black_box(result)
        })
    });
}

criterion_group!(benches, packer_benchmark);
criterion_main!(benches);
