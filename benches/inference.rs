//! Inference benchmark: feature vector → scale → classify, per model kind.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use purchase_predictor::features::{assemble, validate, FeatureColumns};
use purchase_predictor::model::{LogisticRegression, RandomForest, StandardScaler, Tree};
use purchase_predictor::presets::EXAMPLES;
use purchase_predictor::{ArtifactBundle, PurchasePredictor};

const COLUMNS: [&str; 8] = [
    "age",
    "gender",
    "annual_income",
    "number_of_purchases",
    "product_category",
    "time_spent_on_website",
    "loyalty_program",
    "discounts_availed",
];

fn columns() -> FeatureColumns {
    FeatureColumns::new(COLUMNS.iter().map(|s| s.to_string()).collect()).unwrap()
}

fn scaler() -> StandardScaler {
    StandardScaler {
        mean: vec![40.0, 0.5, 60000.0, 10.0, 2.0, 30.0, 0.5, 2.5],
        scale: vec![15.0, 0.5, 20000.0, 5.0, 1.4, 10.0, 0.5, 1.5],
    }
}

fn stump(feature: i64, threshold: f64) -> Tree {
    Tree {
        children_left: vec![1, -1, -1],
        children_right: vec![2, -1, -1],
        feature: vec![feature, -2, -2],
        threshold: vec![threshold, -2.0, -2.0],
        value: vec![[0.0, 0.0], [3.0, 1.0], [1.0, 3.0]],
    }
}

fn bench_logistic(c: &mut Criterion) {
    let model = LogisticRegression {
        coef: vec![0.1, -0.2, 0.4, 0.3, 0.0, 0.8, 0.5, 0.2],
        intercept: -0.1,
    };
    let bundle =
        ArtifactBundle::from_parts(Box::new(model), Box::new(scaler()), columns()).unwrap();
    let predictor = PurchasePredictor::new(bundle);
    let features = validate(&EXAMPLES[1]).unwrap();
    let vector = assemble(&features, predictor.bundle().feature_columns()).unwrap();

    c.bench_function("infer_logistic_8d", |b| {
        b.iter(|| predictor.infer(black_box(&vector)))
    });
}

fn bench_forest_by_size(c: &mut Criterion) {
    let features = validate(&EXAMPLES[2]).unwrap();
    let mut g = c.benchmark_group("infer_forest_by_trees");
    for n in [10, 100, 500] {
        let trees = (0..n)
            .map(|i| stump((i % 8) as i64, (i % 5) as f64 * 0.25))
            .collect();
        let model = RandomForest {
            n_features: 8,
            trees,
        };
        let bundle =
            ArtifactBundle::from_parts(Box::new(model), Box::new(scaler()), columns()).unwrap();
        let predictor = PurchasePredictor::new(bundle);
        let vector = assemble(&features, predictor.bundle().feature_columns()).unwrap();
        g.bench_function(format!("trees_{}", n).as_str(), |b| {
            b.iter(|| predictor.infer(black_box(&vector)))
        });
    }
    g.finish();
}

criterion_group!(benches, bench_logistic, bench_forest_by_size);
criterion_main!(benches);
