// File: crates/mekko-core/benches/layout_bench.rs
// Summary: Engine throughput on a synthetic transactional dataset.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};
use mekko_core::{Category, Dataset, LayoutSpec, SortPolicy};

fn synthetic(rows: usize, xs: usize, ys: usize) -> Dataset {
    let mut ds = Dataset::new(["x", "y", "v", "note"]);
    for i in 0..rows {
        let x = format!("X{:03}", (i * 7) % xs);
        let y = format!("Y{}", (i * 13) % ys);
        let v = 1.0 + ((i * 31) % 997) as f64;
        ds.push_row(vec![x.into(), y.into(), v.into(), "-".into()]);
    }
    ds
}

fn bench_compute(c: &mut Criterion) {
    let ys: Vec<Category> = (0..6).map(|i| Category::from(format!("Y{i}"))).collect();
    let mut group = c.benchmark_group("compute");
    for &n in &[1_000usize, 100_000usize] {
        let ds = synthetic(n, 40, 6);
        for sort in [SortPolicy::ByXCategory, SortPolicy::ByTotalValueDesc] {
            let spec = LayoutSpec::new("x", "y", "v", ys.clone()).with_sort(sort);
            group.bench_with_input(BenchmarkId::new(format!("{sort:?}"), n), &ds, |b, ds| {
                b.iter(|| black_box(spec.compute(ds).expect("layout")));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_compute);
criterion_main!(benches);
