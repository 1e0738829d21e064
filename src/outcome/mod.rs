//! Prediction outcome and its display text.

mod formatter;

pub use formatter::{Outcome, PredictionResult};
