//! Scaler and classifier seams, plus the JSON artifact formats that implement them.

mod forest;
mod logistic;
mod scaler;

pub use forest::{DecisionTree, RandomForest, Tree};
pub use logistic::LogisticRegression;
pub use scaler::{IdentityScaler, MinMaxScaler, StandardScaler};

use crate::error::{ArtifactError, PredictError};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Label for "no purchase".
pub const CLASS_NO_PURCHASE: u8 = 0;
/// Label for "purchase".
pub const CLASS_PURCHASE: u8 = 1;

/// Fitted numeric transform into the space the classifier was trained on.
pub trait Scaler: Send + Sync {
    fn n_features(&self) -> usize;

    fn transform(&self, x: &Array2<f64>) -> Result<Array2<f64>, PredictError>;
}

/// Trained binary classifier. Labels are [`CLASS_NO_PURCHASE`] / [`CLASS_PURCHASE`];
/// probability columns follow the same order.
pub trait Classifier: Send + Sync {
    fn n_features(&self) -> usize;

    fn predict(&self, x: &Array2<f64>) -> Result<Vec<u8>, PredictError>;

    fn predict_proba(&self, x: &Array2<f64>) -> Result<Array2<f64>, PredictError>;
}

pub(crate) fn check_width(x: &Array2<f64>, expected: usize) -> Result<(), PredictError> {
    if x.ncols() != expected {
        return Err(PredictError::Shape {
            expected,
            actual: x.ncols(),
        });
    }
    Ok(())
}

/// On-disk scaler document, tagged by `kind`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScalerArtifact {
    Standard(StandardScaler),
    MinMax(MinMaxScaler),
    Identity(IdentityScaler),
}

impl ScalerArtifact {
    pub fn check(&self) -> Result<(), ArtifactError> {
        match self {
            ScalerArtifact::Standard(s) => s.check(),
            ScalerArtifact::MinMax(s) => s.check(),
            ScalerArtifact::Identity(_) => Ok(()),
        }
    }

    fn inner(&self) -> &dyn Scaler {
        match self {
            ScalerArtifact::Standard(s) => s,
            ScalerArtifact::MinMax(s) => s,
            ScalerArtifact::Identity(s) => s,
        }
    }
}

impl Scaler for ScalerArtifact {
    fn n_features(&self) -> usize {
        self.inner().n_features()
    }

    fn transform(&self, x: &Array2<f64>) -> Result<Array2<f64>, PredictError> {
        self.inner().transform(x)
    }
}

/// On-disk classifier document, tagged by `kind`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassifierArtifact {
    LogisticRegression(LogisticRegression),
    DecisionTree(DecisionTree),
    RandomForest(RandomForest),
}

impl ClassifierArtifact {
    pub fn check(&self) -> Result<(), ArtifactError> {
        match self {
            ClassifierArtifact::LogisticRegression(m) => m.check(),
            ClassifierArtifact::DecisionTree(m) => m.check(),
            ClassifierArtifact::RandomForest(m) => m.check(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ClassifierArtifact::LogisticRegression(_) => "logistic_regression",
            ClassifierArtifact::DecisionTree(_) => "decision_tree",
            ClassifierArtifact::RandomForest(_) => "random_forest",
        }
    }

    fn inner(&self) -> &dyn Classifier {
        match self {
            ClassifierArtifact::LogisticRegression(m) => m,
            ClassifierArtifact::DecisionTree(m) => m,
            ClassifierArtifact::RandomForest(m) => m,
        }
    }
}

impl Classifier for ClassifierArtifact {
    fn n_features(&self) -> usize {
        self.inner().n_features()
    }

    fn predict(&self, x: &Array2<f64>) -> Result<Vec<u8>, PredictError> {
        self.inner().predict(x)
    }

    fn predict_proba(&self, x: &Array2<f64>) -> Result<Array2<f64>, PredictError> {
        self.inner().predict_proba(x)
    }
}
