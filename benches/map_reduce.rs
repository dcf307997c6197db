use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sequence_ops::processing::{filter, filter_indexed, map, map_indexed, reduce};
use sequence_ops::types::Person;

fn roster_of_n(n: usize) -> Vec<Person> {
    (0..n)
        .map(|i| Person::new(format!("First{i}"), format!("Last{i}"), (i % 60) as i64 + 10))
        .collect()
}

fn bench_map_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_reduce");
    for &n in &[1_000usize, 100_000] {
        let roster = roster_of_n(n);

        group.bench_with_input(BenchmarkId::new("map_ages", n), &roster, |b, roster| {
            b.iter(|| map(black_box(roster), |p| p.age))
        });

        group.bench_with_input(BenchmarkId::new("filter_adults", n), &roster, |b, roster| {
            b.iter(|| filter(black_box(roster), |p| p.age >= 21))
        });

        group.bench_with_input(BenchmarkId::new("reduce_total_age", n), &roster, |b, roster| {
            b.iter(|| reduce(black_box(roster), |acc: f64, p| acc + p.age as f64))
        });

        group.bench_with_input(BenchmarkId::new("pipeline", n), &roster, |b, roster| {
            b.iter(|| {
                let adults = filter(black_box(roster), |p| p.age >= 21);
                let queue = filter_indexed(&adults, |_, idx| idx % 2 == 0);
                map_indexed(&queue, |p, idx| format!("{}. {}", idx + 1, p.full_name()))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_map_reduce);
criterion_main!(benches);
