//! Binary logistic regression: `p(purchase) = σ(w·x + b)`.

use super::{check_width, Classifier, CLASS_NO_PURCHASE, CLASS_PURCHASE};
use crate::error::{ArtifactError, PredictError};
use ndarray::{Array1, Array2, ArrayView1};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticRegression {
    pub coef: Vec<f64>,
    pub intercept: f64,
}

impl LogisticRegression {
    pub fn check(&self) -> Result<(), ArtifactError> {
        if self.coef.is_empty() {
            return Err(ArtifactError::Invalid(
                "logistic regression has no coefficients".into(),
            ));
        }
        if !self.intercept.is_finite() || self.coef.iter().any(|w| !w.is_finite()) {
            return Err(ArtifactError::Invalid(
                "logistic regression weights must be finite".into(),
            ));
        }
        Ok(())
    }

    pub fn decision_function(&self, x: &Array2<f64>) -> Result<Array1<f64>, PredictError> {
        check_width(x, self.coef.len())?;
        let w = ArrayView1::from(&self.coef[..]);
        Ok(x.dot(&w) + self.intercept)
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

impl Classifier for LogisticRegression {
    fn n_features(&self) -> usize {
        self.coef.len()
    }

    fn predict(&self, x: &Array2<f64>) -> Result<Vec<u8>, PredictError> {
        let z = self.decision_function(x)?;
        Ok(z
            .iter()
            .map(|&z| if z > 0.0 { CLASS_PURCHASE } else { CLASS_NO_PURCHASE })
            .collect())
    }

    fn predict_proba(&self, x: &Array2<f64>) -> Result<Array2<f64>, PredictError> {
        let z = self.decision_function(x)?;
        let mut out = Array2::zeros((z.len(), 2));
        for (i, &z) in z.iter().enumerate() {
            let p1 = sigmoid(z);
            out[[i, 0]] = 1.0 - p1;
            out[[i, 1]] = p1;
        }
        Ok(out)
    }
}
