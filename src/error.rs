//! Error types for validation, artifact loading and prediction.

use std::path::PathBuf;
use thiserror::Error;

/// Rejected customer input. `Display` is the exact message shown to the user.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("⚠️ Error: Please enter a valid age (1-120)")]
    InvalidAge,

    #[error("⚠️ Error: Annual income cannot be negative")]
    NegativeIncome,

    #[error("⚠️ Error: Time spent cannot be negative")]
    NegativeTimeSpent,

    #[error("⚠️ Error: Number of purchases cannot be negative")]
    NegativePurchaseCount,

    #[error("⚠️ Error: Gender must be 0 (Male) or 1 (Female)")]
    InvalidGender,

    #[error("⚠️ Error: Product category must be between 0 and 4")]
    InvalidProductCategory,

    #[error("⚠️ Error: Loyalty program must be 0 (No) or 1 (Yes)")]
    InvalidLoyaltyProgram,

    #[error("⚠️ Error: Discounts availed must be between 0 and 5")]
    InvalidDiscounts,

    #[error("⚠️ Error: Annual income must be a finite number")]
    NonFiniteIncome,

    #[error("⚠️ Error: Time spent must be a finite number")]
    NonFiniteTimeSpent,
}

/// Failure while loading or cross-checking the artifact files.
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid artifact: {0}")]
    Invalid(String),

    #[error("{artifact} expects {actual} features but the column list has {expected}")]
    Mismatch {
        artifact: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Failure of a single prediction request.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictError {
    /// Input rejected before the pipeline ran.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("column '{0}' is not a known customer feature")]
    MissingColumn(String),

    #[error("expected {expected} features, got {actual}")]
    Shape { expected: usize, actual: usize },

    #[error("classifier returned unknown label {0}")]
    UnknownLabel(u8),

    #[error("classifier returned invalid probability {0}")]
    InvalidProbability(f64),

    #[error("{0}")]
    Model(String),
}

impl PredictError {
    pub fn is_validation(&self) -> bool {
        matches!(self, PredictError::Validation(_))
    }
}
