//! The prediction entry point over a shared, immutable artifact bundle.

use crate::artifacts::ArtifactBundle;
use crate::error::PredictError;
use crate::features::{assemble, validate, CustomerInput, FeatureVector};
use crate::outcome::PredictionResult;
use std::sync::Arc;
use tracing::{debug, warn};

/// Prefix for failures raised after validation passed.
const PIPELINE_ERROR_PREFIX: &str = "⚠️ Error in prediction: ";

/// Cheap to clone; every clone reads the same artifacts.
#[derive(Debug, Clone)]
pub struct PurchasePredictor {
    bundle: Arc<ArtifactBundle>,
}

impl PurchasePredictor {
    pub fn new(bundle: ArtifactBundle) -> Self {
        Self {
            bundle: Arc::new(bundle),
        }
    }

    pub fn from_shared(bundle: Arc<ArtifactBundle>) -> Self {
        Self { bundle }
    }

    pub fn bundle(&self) -> &ArtifactBundle {
        &self.bundle
    }

    /// Validate, assemble and run inference for one customer.
    pub fn predict(&self, input: &CustomerInput) -> Result<PredictionResult, PredictError> {
        let features = validate(input).map_err(|e| {
            debug!(error = %e, "input rejected");
            e
        })?;
        let vector = assemble(&features, self.bundle.feature_columns())?;
        let result = self.infer(&vector)?;
        debug!(
            outcome = ?result.outcome,
            confidence = result.confidence,
            "prediction"
        );
        Ok(result)
    }

    /// Scale the vector, then ask the classifier for a label and class probabilities.
    pub fn infer(&self, vector: &FeatureVector) -> Result<PredictionResult, PredictError> {
        let expected = self.bundle.feature_columns().len();
        if vector.len() != expected {
            return Err(PredictError::Shape {
                expected,
                actual: vector.len(),
            });
        }

        let scaled = self.bundle.scaler().transform(&vector.to_row())?;
        let classifier = self.bundle.classifier();

        let label = classifier
            .predict(&scaled)?
            .first()
            .copied()
            .ok_or_else(|| PredictError::Model("classifier returned no label".into()))?;

        let proba = classifier.predict_proba(&scaled)?;
        if proba.shape() != [1, 2] {
            return Err(PredictError::Model(format!(
                "expected a 1x2 probability matrix, got {:?}",
                proba.shape()
            )));
        }

        PredictionResult::from_model_output(label, [proba[[0, 0]], proba[[0, 1]]])
    }

    /// Display text for one request: the formatted result, the validation message,
    /// or the pipeline failure behind a warning prefix. Never fails.
    pub fn predict_display(&self, input: &CustomerInput) -> String {
        match self.predict(input) {
            Ok(result) => result.to_string(),
            Err(e) if e.is_validation() => e.to_string(),
            Err(e) => {
                warn!(error = %e, "prediction failed");
                format!("{}{}", PIPELINE_ERROR_PREFIX, e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::FeatureColumns;
    use crate::model::{Classifier, DecisionTree, IdentityScaler, Scaler, Tree};
    use ndarray::Array2;
    use std::sync::atomic::{AtomicUsize, Ordering};

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

    /// Fixed answer; counts calls so tests can assert inference was skipped.
    struct Fixed {
        label: u8,
        proba: [f64; 2],
        calls: Arc<AtomicUsize>,
    }

    impl Classifier for Fixed {
        fn n_features(&self) -> usize {
            COLUMNS.len()
        }

        fn predict(&self, _x: &Array2<f64>) -> Result<Vec<u8>, PredictError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![self.label])
        }

        fn predict_proba(&self, _x: &Array2<f64>) -> Result<Array2<f64>, PredictError> {
            let mut out = Array2::zeros((1, 2));
            out[[0, 0]] = self.proba[0];
            out[[0, 1]] = self.proba[1];
            Ok(out)
        }
    }

    struct Failing;

    impl Scaler for Failing {
        fn n_features(&self) -> usize {
            COLUMNS.len()
        }

        fn transform(&self, _x: &Array2<f64>) -> Result<Array2<f64>, PredictError> {
            Err(PredictError::Model("scaler exploded".into()))
        }
    }

    fn input() -> CustomerInput {
        CustomerInput {
            age: 25,
            gender: 0,
            annual_income: 50000.0,
            number_of_purchases: 5,
            product_category: 0,
            time_spent: 30.0,
            loyalty_program: 0,
            discounts_availed: 2,
        }
    }

    fn predictor(label: u8, proba: [f64; 2]) -> (PurchasePredictor, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let classifier = Fixed {
            label,
            proba,
            calls: calls.clone(),
        };
        let bundle = ArtifactBundle::from_parts(
            Box::new(classifier),
            Box::new(IdentityScaler { n_features: 8 }),
            columns(),
        )
        .unwrap();
        (PurchasePredictor::new(bundle), calls)
    }

    #[test]
    fn formats_likely_result() {
        let (p, _) = predictor(1, [0.1234, 0.8766]);
        assert_eq!(
            p.predict_display(&input()),
            "✅ Purchase Likely\nConfidence: 87.66%"
        );
    }

    #[test]
    fn validation_short_circuits_inference() {
        let (p, calls) = predictor(1, [0.0, 1.0]);
        let bad = CustomerInput { age: 0, ..input() };
        assert_eq!(
            p.predict_display(&bad),
            "⚠️ Error: Please enter a valid age (1-120)"
        );
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn pipeline_failure_is_prefixed() {
        let bundle = ArtifactBundle::from_parts(
            Box::new(Fixed {
                label: 1,
                proba: [0.0, 1.0],
                calls: Arc::new(AtomicUsize::new(0)),
            }),
            Box::new(Failing),
            columns(),
        )
        .unwrap();
        let p = PurchasePredictor::new(bundle);
        assert_eq!(
            p.predict_display(&input()),
            "⚠️ Error in prediction: scaler exploded"
        );
    }

    #[test]
    fn unknown_label_is_a_pipeline_error() {
        let (p, _) = predictor(3, [0.5, 0.5]);
        assert_eq!(
            p.predict_display(&input()),
            "⚠️ Error in prediction: classifier returned unknown label 3"
        );
    }

    #[test]
    fn malformed_tree_reports_instead_of_panicking() {
        let tree = Tree {
            children_left: vec![1, -1, -1],
            children_right: vec![2, -1, -1],
            feature: vec![5, -2, -2],
            threshold: vec![40.0, -2.0, -2.0],
            value: vec![[0.0, 0.0]],
        };
        let bundle = ArtifactBundle::from_parts(
            Box::new(DecisionTree {
                n_features: 8,
                tree,
            }),
            Box::new(IdentityScaler { n_features: 8 }),
            columns(),
        )
        .unwrap();
        let p = PurchasePredictor::new(bundle);
        assert_eq!(
            p.predict_display(&input()),
            "⚠️ Error in prediction: tree node 1 has no value"
        );
    }

    #[test]
    fn bundle_rejects_width_mismatch() {
        let r = ArtifactBundle::from_parts(
            Box::new(Fixed {
                label: 0,
                proba: [1.0, 0.0],
                calls: Arc::new(AtomicUsize::new(0)),
            }),
            Box::new(IdentityScaler { n_features: 7 }),
            columns(),
        );
        assert!(r.is_err());
    }
}
