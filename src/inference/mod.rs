//! Inference pipeline: validate → assemble → scale → classify → format.

mod pipeline;

pub use pipeline::PurchasePredictor;
