use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use r2d2_descriptors::{distance, mean_value, pack_sequence, Descriptor, L};

fn generate_descriptors(n: usize) -> Vec<Descriptor> {
    (0..n)
        .map(|k| {
            let mut values = [0.0; L];
            for (i, value) in values.iter_mut().enumerate() {
                *value = ((i + k) as f32) * 0.01;
            }
            Descriptor::from(values)
        })
        .collect()
}

fn bench_distance(c: &mut Criterion) {
    let descriptors = generate_descriptors(2);
    c.bench_function("distance", |bencher| {
        bencher.iter(|| distance(black_box(&descriptors[0]), black_box(&descriptors[1])))
    });
}

fn bench_mean_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("mean_value");

    for n in [2, 10, 100, 1000].iter() {
        let descriptors = generate_descriptors(*n);
        let refs: Vec<&Descriptor> = descriptors.iter().collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), n, |bencher, _| {
            bencher.iter(|| mean_value(black_box(&refs)))
        });
    }

    group.finish();
}

fn bench_pack_sequence(c: &mut Criterion) {
    let descriptors = generate_descriptors(1000);
    c.bench_function("pack_sequence", |bencher| {
        bencher.iter(|| pack_sequence(black_box(&descriptors)))
    });
}

criterion_group!(benches, bench_distance, bench_mean_value, bench_pack_sequence);
criterion_main!(benches);
