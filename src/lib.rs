//! Purchase predictor — customer purchase likelihood from a pre-trained classifier.
//!
//! Modular structure:
//! - [`config`] — Artifact paths and logging settings (JSON)
//! - [`error`] — Validation, artifact and prediction errors
//! - [`features`] — Input validation and model-ordered feature assembly
//! - [`model`] — Scaler / classifier traits and their JSON artifact formats
//! - [`artifacts`] — Load-once, read-only artifact bundle
//! - [`inference`] — Scale → predict → format pipeline
//! - [`outcome`] — Prediction result and display text
//! - [`presets`] — Example customers
//! - [`logging`] — Structured logging

pub mod artifacts;
pub mod config;
pub mod error;
pub mod features;
pub mod inference;
pub mod logging;
pub mod model;
pub mod outcome;
pub mod presets;

pub use artifacts::ArtifactBundle;
pub use config::AppConfig;
pub use error::{ArtifactError, PredictError, ValidationError};
pub use features::{CustomerFeatures, CustomerInput, FeatureColumns, FeatureVector};
pub use inference::PurchasePredictor;
pub use logging::StructuredLogger;
pub use outcome::{Outcome, PredictionResult};
