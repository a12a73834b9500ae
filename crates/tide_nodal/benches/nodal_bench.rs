use criterion::{Criterion, black_box, criterion_group, criterion_main};
use tide_nodal::{
    ArctanBranch, AstronomicalAngles, CorrectionConfig, f_k1, f_k2, f_l2, f_m1, f_m2, registry,
    u_l2, u_m1,
};

fn sample_angles() -> AstronomicalAngles {
    AstronomicalAngles::builder()
        .omega(23.4393)
        .i(5.145)
        .big_i(25.3)
        .nu(10.2)
        .nup(7.1)
        .nupp(14.9)
        .xi(9.4)
        .p(101.7)
        .build()
        .unwrap()
}

fn node_factor_bench(c: &mut Criterion) {
    let a = sample_angles();

    let mut group = c.benchmark_group("node_factor");
    group.bench_function("f_m2", |b| b.iter(|| f_m2(black_box(&a))));
    group.bench_function("f_k1", |b| b.iter(|| f_k1(black_box(&a))));
    group.bench_function("f_k2", |b| b.iter(|| f_k2(black_box(&a))));
    group.bench_function("f_l2", |b| b.iter(|| f_l2(black_box(&a))));
    group.bench_function("f_m1", |b| b.iter(|| f_m1(black_box(&a))));
    group.finish();
}

fn phase_bench(c: &mut Criterion) {
    let a = sample_angles();

    let mut group = c.benchmark_group("phase");
    group.bench_function("u_l2_principal", |b| {
        b.iter(|| u_l2(black_box(&a), ArctanBranch::Principal))
    });
    group.bench_function("u_m1_quadrant", |b| {
        b.iter(|| u_m1(black_box(&a), ArctanBranch::Quadrant))
    });
    group.finish();
}

fn registry_bench(c: &mut Criterion) {
    let a = sample_angles();
    let cfg = CorrectionConfig::default();

    let mut group = c.benchmark_group("registry");
    group.bench_function("evaluate_mk3", |b| {
        b.iter(|| registry().evaluate(black_box("MK3"), black_box(&a), &cfg))
    });
    group.bench_function("evaluate_all", |b| {
        b.iter(|| registry().evaluate_all(black_box(&a), &cfg))
    });
    group.finish();
}

criterion_group!(benches, node_factor_bench, phase_bench, registry_bench);
criterion_main!(benches);
