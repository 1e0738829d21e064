//! Turns a binary label plus class probabilities into a labeled confidence string.

use crate::error::PredictError;
use crate::model::{CLASS_NO_PURCHASE, CLASS_PURCHASE};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Purchase,
    NoPurchase,
}

impl Outcome {
    pub fn from_label(label: u8) -> Result<Self, PredictError> {
        match label {
            CLASS_PURCHASE => Ok(Outcome::Purchase),
            CLASS_NO_PURCHASE => Ok(Outcome::NoPurchase),
            other => Err(PredictError::UnknownLabel(other)),
        }
    }

    pub fn headline(self) -> &'static str {
        match self {
            Outcome::Purchase => "✅ Purchase Likely",
            Outcome::NoPurchase => "❌ Purchase Unlikely",
        }
    }
}

/// Result of one request: outcome plus confidence in the predicted class, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub outcome: Outcome,
    pub confidence: f64,
}

impl PredictionResult {
    /// `proba` is `[p(no purchase), p(purchase)]`; the entry for the predicted label is kept.
    pub fn from_model_output(label: u8, proba: [f64; 2]) -> Result<Self, PredictError> {
        let outcome = Outcome::from_label(label)?;
        let p = match outcome {
            Outcome::Purchase => proba[1],
            Outcome::NoPurchase => proba[0],
        };
        if !(0.0..=1.0).contains(&p) {
            return Err(PredictError::InvalidProbability(p));
        }
        Ok(Self {
            outcome,
            confidence: p * 100.0,
        })
    }
}

impl fmt::Display for PredictionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\nConfidence: {:.2}%",
            self.outcome.headline(),
            self.confidence
        )
    }
}
