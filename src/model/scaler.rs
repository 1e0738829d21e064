//! Fitted feature scalers.

use super::{check_width, Scaler};
use crate::error::{ArtifactError, PredictError};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// `(x - mean) / scale`, column-wise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    pub fn check(&self) -> Result<(), ArtifactError> {
        if self.mean.len() != self.scale.len() {
            return Err(ArtifactError::Invalid(format!(
                "standard scaler has {} means but {} scales",
                self.mean.len(),
                self.scale.len()
            )));
        }
        if self.mean.iter().chain(&self.scale).any(|v| !v.is_finite()) {
            return Err(ArtifactError::Invalid(
                "standard scaler parameters must be finite".into(),
            ));
        }
        Ok(())
    }
}

impl Scaler for StandardScaler {
    fn n_features(&self) -> usize {
        self.mean.len()
    }

    fn transform(&self, x: &Array2<f64>) -> Result<Array2<f64>, PredictError> {
        check_width(x, self.n_features())?;
        let mut out = x.to_owned();
        for mut row in out.rows_mut() {
            for (j, v) in row.iter_mut().enumerate() {
                *v = (*v - self.mean[j]) / non_zero(self.scale[j]);
            }
        }
        Ok(out)
    }
}

/// Linear map of `[data_min, data_max]` onto `feature_range`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinMaxScaler {
    pub data_min: Vec<f64>,
    pub data_max: Vec<f64>,
    #[serde(default = "unit_range")]
    pub feature_range: (f64, f64),
}

fn unit_range() -> (f64, f64) {
    (0.0, 1.0)
}

impl MinMaxScaler {
    pub fn check(&self) -> Result<(), ArtifactError> {
        if self.data_min.len() != self.data_max.len() {
            return Err(ArtifactError::Invalid(format!(
                "min-max scaler has {} minimums but {} maximums",
                self.data_min.len(),
                self.data_max.len()
            )));
        }
        let (lo, hi) = self.feature_range;
        if !lo.is_finite() || !hi.is_finite() || lo >= hi {
            return Err(ArtifactError::Invalid(format!(
                "min-max feature range ({}, {}) is empty",
                lo, hi
            )));
        }
        if self
            .data_min
            .iter()
            .chain(&self.data_max)
            .any(|v| !v.is_finite())
        {
            return Err(ArtifactError::Invalid(
                "min-max scaler parameters must be finite".into(),
            ));
        }
        Ok(())
    }
}

impl Scaler for MinMaxScaler {
    fn n_features(&self) -> usize {
        self.data_min.len()
    }

    fn transform(&self, x: &Array2<f64>) -> Result<Array2<f64>, PredictError> {
        check_width(x, self.n_features())?;
        let (lo, hi) = self.feature_range;
        let mut out = x.to_owned();
        for mut row in out.rows_mut() {
            for (j, v) in row.iter_mut().enumerate() {
                let range = non_zero(self.data_max[j] - self.data_min[j]);
                *v = lo + (*v - self.data_min[j]) / range * (hi - lo);
            }
        }
        Ok(out)
    }
}

/// Passthrough for models trained on raw values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityScaler {
    pub n_features: usize,
}

impl Scaler for IdentityScaler {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn transform(&self, x: &Array2<f64>) -> Result<Array2<f64>, PredictError> {
        check_width(x, self.n_features)?;
        Ok(x.to_owned())
    }
}

// Constant columns are fitted with a unit scale.
fn non_zero(v: f64) -> f64 {
    if v == 0.0 {
        1.0
    } else {
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn standard_zero_scale_is_unit() {
        let s = StandardScaler {
            mean: vec![5.0, 1.0],
            scale: vec![0.0, 0.5],
        };
        assert_eq!(s.transform(&array![[7.0, 2.0]]).unwrap(), array![[2.0, 2.0]]);
    }

    #[test]
    fn standard_rejects_wrong_width() {
        let s = StandardScaler {
            mean: vec![0.0; 3],
            scale: vec![1.0; 3],
        };
        assert_eq!(
            s.transform(&array![[1.0, 2.0]]),
            Err(PredictError::Shape {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn standard_check_catches_length_mismatch() {
        let s = StandardScaler {
            mean: vec![0.0; 3],
            scale: vec![1.0; 2],
        };
        assert!(s.check().is_err());
    }

    #[test]
    fn min_max_maps_onto_range() {
        let s = MinMaxScaler {
            data_min: vec![0.0, 10.0],
            data_max: vec![100.0, 10.0],
            feature_range: (-1.0, 1.0),
        };
        s.check().unwrap();
        assert_eq!(
            s.transform(&array![[25.0, 12.0]]).unwrap(),
            array![[-0.5, 3.0]]
        );
    }

    #[test]
    fn min_max_check_rejects_non_finite_range() {
        for range in [(f64::NAN, 1.0), (0.0, f64::NAN), (0.0, f64::INFINITY), (1.0, 1.0)] {
            let s = MinMaxScaler {
                data_min: vec![0.0],
                data_max: vec![1.0],
                feature_range: range,
            };
            assert!(s.check().is_err(), "{:?}", range);
        }
    }

    #[test]
    fn min_max_default_range() {
        let s: MinMaxScaler =
            serde_json::from_str(r#"{"data_min":[0.0],"data_max":[4.0]}"#).unwrap();
        assert_eq!(s.transform(&array![[1.0]]).unwrap(), array![[0.25]]);
    }

    #[test]
    fn identity_passthrough() {
        let s = IdentityScaler { n_features: 2 };
        assert_eq!(s.transform(&array![[3.0, 4.0]]).unwrap(), array![[3.0, 4.0]]);
    }
}
