use codspeed_criterion_compat::{Criterion, criterion_group, criterion_main};
use mortlaw::prelude::*;

fn bench_hazard_evaluation(c: &mut Criterion) {
    let makeham = Makeham::default();
    let thiele = Thiele::default();

    c.bench_function("makeham_hazard_single_age", |b| {
        b.iter(|| makeham.hazard(45.0))
    });

    c.bench_function("thiele_hazard_single_age", |b| b.iter(|| thiele.hazard(45.0)));

    c.bench_function("catalog_hazard_age_range_0_120", |b| {
        let catalog = ParametricModel::catalog();
        b.iter(|| {
            for model in &catalog {
                let _total: f64 = model.hazards((0..=120).map(f64::from)).sum();
            }
        })
    });
}

fn bench_closed_form_derivations(c: &mut Criterion) {
    let makeham = Makeham::default();
    let weibull = Weibull::default();

    c.bench_function("makeham_survivorship_closed_form", |b| {
        b.iter(|| survivorship().model(&makeham).to_age(65.0).call().unwrap())
    });

    c.bench_function("weibull_decrement_two_age", |b| {
        b.iter(|| {
            decrement()
                .model(&weibull)
                .from_age(40.0)
                .to_age(65.0)
                .call()
                .unwrap()
        })
    });
}

fn bench_integrated_derivations(c: &mut Criterion) {
    let thiele = Thiele::default();
    let perks = Perks::default();
    let weibull = Weibull::default();
    let gk = GaussKronrod::default();

    c.bench_function("thiele_survivorship_integrated", |b| {
        b.iter(|| survivorship().model(&thiele).to_age(65.0).call().unwrap())
    });

    c.bench_function("perks_conditional_survivorship", |b| {
        b.iter(|| {
            survivorship()
                .model(&perks)
                .from_age(40.0)
                .to_age(65.0)
                .call()
                .unwrap()
        })
    });

    // Endpoint singularity forces deep bisection towards age 0
    c.bench_function("weibull_survivorship_integrated", |b| {
        b.iter(|| integrated_survivorship(&weibull, 65.0, &gk).unwrap())
    });
}

fn bench_life_table(c: &mut Criterion) {
    let ages: Vec<f64> = (0..=100).map(f64::from).collect();
    let makeham = Makeham::default();
    let thiele = Thiele::default();

    c.bench_function("makeham_life_table_0_100", |b| {
        b.iter(|| life_table().model(&makeham).ages(&ages).call().unwrap())
    });

    c.bench_function("thiele_life_table_0_100", |b| {
        b.iter(|| life_table().model(&thiele).ages(&ages).call().unwrap())
    });
}

criterion_group!(
    benches,
    bench_hazard_evaluation,
    bench_closed_form_derivations,
    bench_integrated_derivations,
    bench_life_table
);
criterion_main!(benches);
