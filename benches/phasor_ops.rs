use ac_phasor::power::{phase_unbalance, Impedance, Phasor, ThreePhase};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("phasor_arithmetic");
    let a = Phasor::new(230.0, 12.5);
    let b = Phasor::new(17.0, -48.0);
    let z = Impedance::new(0.4, 1.2);

    group.bench_function("plus", |bench| bench.iter(|| black_box(a).plus(black_box(b))));
    group.bench_function("times", |bench| bench.iter(|| black_box(a).times(black_box(b))));
    group.bench_function("times_impedance", |bench| {
        bench.iter(|| black_box(b).times_impedance(black_box(z)))
    });
    group.bench_function("divided_by", |bench| {
        bench.iter(|| black_box(a).divided_by(black_box(b)))
    });
    group.finish();
}

fn bench_accumulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("phasor_sum");
    for n in [16_usize, 1_024] {
        let phasors: Vec<Phasor> = (0..n)
            .map(|i| Phasor::new(1.0 + i as f64, i as f64 * 7.0))
            .collect();
        group.bench_with_input(BenchmarkId::new("sum", n), &phasors, |bench, ps| {
            bench.iter(|| ps.iter().copied().sum::<Phasor>())
        });
    }
    group.finish();
}

fn bench_unbalance(c: &mut Criterion) {
    let set = ThreePhase::new(
        Phasor::new(400.0, 0.0),
        Phasor::new(395.0, -121.0),
        Phasor::new(410.0, 119.0),
    );
    c.bench_function("phase_unbalance", |bench| {
        bench.iter(|| phase_unbalance(black_box(set.a), black_box(set.b), black_box(set.c)))
    });
}

criterion_group!(benches, bench_arithmetic, bench_accumulate, bench_unbalance);
criterion_main!(benches);
