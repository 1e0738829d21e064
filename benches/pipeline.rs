//! Pipeline benchmark: raw input → validation → assembly → display string.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use purchase_predictor::features::{assemble, validate, FeatureColumns};
use purchase_predictor::model::{IdentityScaler, LogisticRegression};
use purchase_predictor::presets::EXAMPLES;
use purchase_predictor::{ArtifactBundle, CustomerInput, PurchasePredictor};

fn columns() -> FeatureColumns {
    FeatureColumns::new(
        [
            "discounts_availed",
            "loyalty_program",
            "time_spent_on_website",
            "product_category",
            "number_of_purchases",
            "annual_income",
            "gender",
            "age",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
    )
    .unwrap()
}

fn predictor() -> PurchasePredictor {
    let model = LogisticRegression {
        coef: vec![0.2, 0.5, 0.01, 0.0, 0.05, 0.00001, 0.0, -0.01],
        intercept: -1.0,
    };
    let bundle = ArtifactBundle::from_parts(
        Box::new(model),
        Box::new(IdentityScaler { n_features: 8 }),
        columns(),
    )
    .unwrap();
    PurchasePredictor::new(bundle)
}

fn bench_validate_and_assemble(c: &mut Criterion) {
    let cols = columns();
    c.bench_function("validate_assemble", |b| {
        b.iter(|| {
            let f = validate(black_box(&EXAMPLES[0])).unwrap();
            black_box(assemble(&f, &cols))
        })
    });
}

fn bench_rejected_input(c: &mut Criterion) {
    let p = predictor();
    let bad = CustomerInput {
        age: 0,
        ..EXAMPLES[0]
    };
    c.bench_function("predict_display_rejected", |b| {
        b.iter(|| black_box(p.predict_display(black_box(&bad))))
    });
}

fn bench_full_pipeline(c: &mut Criterion) {
    let p = predictor();
    c.bench_function("predict_display_examples", |b| {
        b.iter(|| {
            for ex in &EXAMPLES {
                black_box(p.predict_display(black_box(ex)));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_validate_and_assemble,
    bench_rejected_input,
    bench_full_pipeline
);
criterion_main!(benches);
