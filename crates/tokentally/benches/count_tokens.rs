use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use tokentally_core::{list_estimators, CounterOptions, TokenCounter};

fn bench_estimators(c: &mut Criterion) {
    let block = "The quick brown fox 跳过了 3 lazy dogs! 今天天气很好。\n";
    let doc = block.repeat(100 * 1024 / block.len());
    let mut group = c.benchmark_group("count_tokens_100kb");

    for name in list_estimators() {
        let counter = TokenCounter::new(CounterOptions::for_name(name));
        group.bench_with_input(BenchmarkId::from_parameter(name), &doc, |b, doc| {
            b.iter(|| counter.count(black_box(doc)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_estimators);
criterion_main!(benches);
