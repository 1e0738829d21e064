//! Decision trees and random forests stored as parallel node arrays.
//!
//! Node `i` is a leaf when `children_left[i] == -1`. Otherwise the walk goes
//! left when `x[feature[i]] <= threshold[i]`. `value[i]` holds the per-class
//! sample weights `[no_purchase, purchase]`.

use super::{check_width, Classifier, CLASS_NO_PURCHASE, CLASS_PURCHASE};
use crate::error::{ArtifactError, PredictError};
use ndarray::{Array2, ArrayView1};
use serde::{Deserialize, Serialize};

const LEAF: i64 = -1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tree {
    pub children_left: Vec<i64>,
    pub children_right: Vec<i64>,
    pub feature: Vec<i64>,
    pub threshold: Vec<f64>,
    pub value: Vec<[f64; 2]>,
}

impl Tree {
    fn check(&self, n_features: usize) -> Result<(), ArtifactError> {
        let n = self.children_left.len();
        if n == 0 {
            return Err(ArtifactError::Invalid("tree has no nodes".into()));
        }
        if [
            self.children_right.len(),
            self.feature.len(),
            self.threshold.len(),
            self.value.len(),
        ]
        .iter()
        .any(|&len| len != n)
        {
            return Err(ArtifactError::Invalid(
                "tree node arrays differ in length".into(),
            ));
        }

        for i in 0..n {
            if self.children_left[i] == LEAF {
                let [w0, w1] = self.value[i];
                if !(w0 >= 0.0 && w1 >= 0.0 && w0 + w1 > 0.0 && (w0 + w1).is_finite()) {
                    return Err(ArtifactError::Invalid(format!(
                        "leaf {} has invalid class weights [{}, {}]",
                        i, w0, w1
                    )));
                }
                continue;
            }
            // Children always come after their parent, so every walk terminates.
            for child in [self.children_left[i], self.children_right[i]] {
                if child <= i as i64 || child >= n as i64 {
                    return Err(ArtifactError::Invalid(format!(
                        "node {} has out-of-order child {}",
                        i, child
                    )));
                }
            }
            let f = self.feature[i];
            if f < 0 || f as usize >= n_features {
                return Err(ArtifactError::Invalid(format!(
                    "node {} splits on feature {} of {}",
                    i, f, n_features
                )));
            }
            if self.threshold[i].is_nan() {
                return Err(ArtifactError::Invalid(format!(
                    "node {} has a NaN threshold",
                    i
                )));
            }
        }
        Ok(())
    }

    /// Normalised class weights `[p0, p1]` of the leaf reached by `x`.
    pub fn leaf_proba(&self, x: ArrayView1<'_, f64>) -> Result<[f64; 2], PredictError> {
        let missing = |what: &str, node: usize| {
            PredictError::Model(format!("tree node {} has no {}", node, what))
        };
        let mut node = 0usize;
        // Bounded by node count even for an unchecked tree.
        for _ in 0..self.children_left.len() {
            let left = *self
                .children_left
                .get(node)
                .ok_or_else(|| missing("left child", node))?;
            if left == LEAF {
                let [w0, w1] = *self.value.get(node).ok_or_else(|| missing("value", node))?;
                let total = w0 + w1;
                if !(total > 0.0 && total.is_finite()) {
                    return Err(PredictError::Model(format!(
                        "leaf {} has invalid class weights [{}, {}]",
                        node, w0, w1
                    )));
                }
                return Ok([w0 / total, w1 / total]);
            }
            let f = *self.feature.get(node).ok_or_else(|| missing("feature", node))?;
            let v = usize::try_from(f)
                .ok()
                .and_then(|f| x.get(f))
                .copied()
                .ok_or_else(|| {
                    PredictError::Model(format!("tree splits on missing feature {}", f))
                })?;
            let threshold = *self
                .threshold
                .get(node)
                .ok_or_else(|| missing("threshold", node))?;
            let next = if v <= threshold {
                left
            } else {
                *self
                    .children_right
                    .get(node)
                    .ok_or_else(|| missing("right child", node))?
            };
            node = usize::try_from(next)
                .map_err(|_| PredictError::Model(format!("node {} has child {}", node, next)))?;
        }
        Err(PredictError::Model("tree walk did not reach a leaf".into()))
    }
}

fn label_from_proba(p: &[f64; 2]) -> u8 {
    if p[1] > p[0] {
        CLASS_PURCHASE
    } else {
        CLASS_NO_PURCHASE
    }
}

fn labels(proba: &Array2<f64>) -> Vec<u8> {
    proba
        .rows()
        .into_iter()
        .map(|r| label_from_proba(&[r[0], r[1]]))
        .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    pub n_features: usize,
    pub tree: Tree,
}

impl DecisionTree {
    pub fn check(&self) -> Result<(), ArtifactError> {
        self.tree.check(self.n_features)
    }
}

impl Classifier for DecisionTree {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict(&self, x: &Array2<f64>) -> Result<Vec<u8>, PredictError> {
        Ok(labels(&self.predict_proba(x)?))
    }

    fn predict_proba(&self, x: &Array2<f64>) -> Result<Array2<f64>, PredictError> {
        check_width(x, self.n_features)?;
        let mut out = Array2::zeros((x.nrows(), 2));
        for (i, row) in x.rows().into_iter().enumerate() {
            let [p0, p1] = self.tree.leaf_proba(row)?;
            out[[i, 0]] = p0;
            out[[i, 1]] = p1;
        }
        Ok(out)
    }
}

/// Soft-voting ensemble: class probabilities are the mean over trees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomForest {
    pub n_features: usize,
    pub trees: Vec<Tree>,
}

impl RandomForest {
    pub fn check(&self) -> Result<(), ArtifactError> {
        if self.trees.is_empty() {
            return Err(ArtifactError::Invalid("random forest has no trees".into()));
        }
        for (i, t) in self.trees.iter().enumerate() {
            t.check(self.n_features)
                .map_err(|e| ArtifactError::Invalid(format!("tree {}: {}", i, e)))?;
        }
        Ok(())
    }
}

impl Classifier for RandomForest {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict(&self, x: &Array2<f64>) -> Result<Vec<u8>, PredictError> {
        Ok(labels(&self.predict_proba(x)?))
    }

    fn predict_proba(&self, x: &Array2<f64>) -> Result<Array2<f64>, PredictError> {
        check_width(x, self.n_features)?;
        if self.trees.is_empty() {
            return Err(PredictError::Model("random forest has no trees".into()));
        }
        let n_trees = self.trees.len() as f64;
        let mut out = Array2::zeros((x.nrows(), 2));
        for (i, row) in x.rows().into_iter().enumerate() {
            let mut sum = [0.0f64; 2];
            for tree in &self.trees {
                let [p0, p1] = tree.leaf_proba(row)?;
                sum[0] += p0;
                sum[1] += p1;
            }
            out[[i, 0]] = sum[0] / n_trees;
            out[[i, 1]] = sum[1] / n_trees;
        }
        Ok(out)
    }
}
