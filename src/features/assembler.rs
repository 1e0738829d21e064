//! Feature assembly: validated record → vector in the model's column order.

use super::{CustomerFeatures, FeatureVector};
use crate::error::{ArtifactError, PredictError};
use std::collections::HashSet;

/// Canonical ordered column names the classifier was trained against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureColumns(Vec<String>);

impl FeatureColumns {
    pub fn new(columns: Vec<String>) -> Result<Self, ArtifactError> {
        if columns.is_empty() {
            return Err(ArtifactError::Invalid("feature column list is empty".into()));
        }
        let mut seen = HashSet::new();
        for c in &columns {
            if !seen.insert(c.as_str()) {
                return Err(ArtifactError::Invalid(format!(
                    "duplicate feature column '{}'",
                    c
                )));
            }
        }
        Ok(Self(columns))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

pub fn assemble(
    features: &CustomerFeatures,
    columns: &FeatureColumns,
) -> Result<FeatureVector, PredictError> {
    let values = columns
        .iter()
        .map(|c| {
            features
                .column_value(c)
                .ok_or_else(|| PredictError::MissingColumn(c.to_string()))
        })
        .collect::<Result<Vec<f64>, _>>()?;

    Ok(FeatureVector {
        columns: columns.as_slice().to_vec(),
        values,
    })
}
