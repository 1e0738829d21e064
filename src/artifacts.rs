//! Artifact bundle: classifier, scaler and feature-column list, loaded once and
//! shared read-only for the life of the process.

use crate::config::ArtifactPaths;
use crate::error::ArtifactError;
use crate::features::FeatureColumns;
use crate::model::{Classifier, ClassifierArtifact, Scaler, ScalerArtifact};
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::info;

pub struct ArtifactBundle {
    classifier: Box<dyn Classifier>,
    scaler: Box<dyn Scaler>,
    feature_columns: FeatureColumns,
}

impl std::fmt::Debug for ArtifactBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArtifactBundle")
            .field("feature_columns", &self.feature_columns)
            .field("scaler_features", &self.scaler.n_features())
            .field("classifier_features", &self.classifier.n_features())
            .finish()
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let data = std::fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| ArtifactError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

impl ArtifactBundle {
    /// Read and cross-check all three artifact files. Any failure is fatal for startup.
    pub fn load(paths: &ArtifactPaths) -> Result<Self, ArtifactError> {
        let columns: Vec<String> = read_json(&paths.features_path)?;
        let feature_columns = FeatureColumns::new(columns)?;

        let scaler: ScalerArtifact = read_json(&paths.scaler_path)?;
        scaler.check()?;

        let classifier: ClassifierArtifact = read_json(&paths.model_path)?;
        classifier.check()?;

        info!(
            model = %paths.model_path.display(),
            kind = classifier.kind(),
            scaler = %paths.scaler_path.display(),
            features = feature_columns.len(),
            "artifacts loaded"
        );

        Self::from_parts(Box::new(classifier), Box::new(scaler), feature_columns)
    }

    /// Assemble a bundle from already-constructed parts (e.g. test doubles).
    pub fn from_parts(
        classifier: Box<dyn Classifier>,
        scaler: Box<dyn Scaler>,
        feature_columns: FeatureColumns,
    ) -> Result<Self, ArtifactError> {
        let expected = feature_columns.len();
        if scaler.n_features() != expected {
            return Err(ArtifactError::Mismatch {
                artifact: "scaler",
                expected,
                actual: scaler.n_features(),
            });
        }
        if classifier.n_features() != expected {
            return Err(ArtifactError::Mismatch {
                artifact: "classifier",
                expected,
                actual: classifier.n_features(),
            });
        }
        Ok(Self {
            classifier,
            scaler,
            feature_columns,
        })
    }

    pub fn classifier(&self) -> &dyn Classifier {
        self.classifier.as_ref()
    }

    pub fn scaler(&self) -> &dyn Scaler {
        self.scaler.as_ref()
    }

    pub fn feature_columns(&self) -> &FeatureColumns {
        &self.feature_columns
    }
}
