//! Pre-trained crop classifier
//!
//! The artifact is a multinomial logistic-regression model produced by an
//! offline training pipeline: per-feature normalization statistics, a
//! coefficient matrix, intercepts, and the ordered class-label list, all
//! serialized with bincode. Loading happens once at startup and failure is
//! fatal; predictions afterwards are pure arithmetic.

use std::cmp::Ordering;
use std::fs;
use std::path::Path;

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared::{CropScore, FeatureVector, FEATURE_COUNT};

/// Errors raised while loading or constructing a model artifact
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read model artifact '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode model artifact '{path}': {source}")]
    Decode {
        path: String,
        #[source]
        source: bincode::Error,
    },

    #[error("failed to write model artifact '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode model artifact: {0}")]
    Encode(#[source] bincode::Error),

    #[error("model artifact is inconsistent: {0}")]
    Inconsistent(String),
}

/// A pre-trained multinomial logistic-regression crop classifier.
///
/// Features must arrive in the exact order [`FeatureVector::to_array`]
/// produces. The classifier performs no range validation; out-of-range
/// values pass straight into the arithmetic and the output on them is
/// undefined. Range checks belong to the request boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropClassifier {
    classes: Vec<String>,
    feature_means: Array1<f64>,
    feature_stds: Array1<f64>,
    /// One row per class, one column per feature.
    coefficients: Array2<f64>,
    intercepts: Array1<f64>,
}

impl CropClassifier {
    /// Assemble a classifier from its parts, checking shape consistency.
    pub fn new(
        classes: Vec<String>,
        feature_means: Array1<f64>,
        feature_stds: Array1<f64>,
        coefficients: Array2<f64>,
        intercepts: Array1<f64>,
    ) -> Result<Self, ModelError> {
        let model = Self {
            classes,
            feature_means,
            feature_stds,
            coefficients,
            intercepts,
        };
        model.check_consistency()?;
        Ok(model)
    }

    /// Deserialize a classifier from a bincode artifact.
    ///
    /// A missing or corrupt file is a startup-time hard failure; callers are
    /// expected to propagate it out of `main`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| ModelError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let model: CropClassifier =
            bincode::deserialize(&bytes).map_err(|source| ModelError::Decode {
                path: path.display().to_string(),
                source,
            })?;
        model.check_consistency()?;
        Ok(model)
    }

    /// Serialize the classifier to a bincode artifact.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ModelError> {
        let path = path.as_ref();
        let bytes = bincode::serialize(self).map_err(ModelError::Encode)?;
        fs::write(path, bytes).map_err(|source| ModelError::Write {
            path: path.display().to_string(),
            source,
        })
    }

    /// Class labels in artifact order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Predict the single most probable crop.
    ///
    /// On an exact probability tie the earlier class in artifact order wins,
    /// matching the ordering of [`Self::rank_probabilities`].
    pub fn predict(&self, features: &FeatureVector) -> &str {
        let probabilities = self.probabilities(features);
        let mut best = 0;
        for (index, &probability) in probabilities.iter().enumerate() {
            if probability > probabilities[best] {
                best = index;
            }
        }
        &self.classes[best]
    }

    /// The `top_k` most probable crops, sorted by probability descending.
    ///
    /// The sort is stable, so exact ties keep the artifact's class order.
    pub fn rank_probabilities(&self, features: &FeatureVector, top_k: usize) -> Vec<CropScore> {
        let probabilities = self.probabilities(features);
        let mut ranked: Vec<CropScore> = self
            .classes
            .iter()
            .zip(probabilities.iter())
            .map(|(crop, &probability)| CropScore {
                crop: crop.clone(),
                probability,
            })
            .collect();
        ranked.sort_by(|a, b| {
            b.probability
                .partial_cmp(&a.probability)
                .unwrap_or(Ordering::Equal)
        });
        ranked.truncate(top_k);
        ranked
    }

    /// Per-class probabilities via softmax over normalized feature scores.
    fn probabilities(&self, features: &FeatureVector) -> Array1<f64> {
        let x = Array1::from(features.to_array().to_vec());
        let normalized = (&x - &self.feature_means) / &self.feature_stds;
        let scores = self.coefficients.dot(&normalized) + &self.intercepts;
        softmax(scores)
    }

    fn check_consistency(&self) -> Result<(), ModelError> {
        if self.classes.is_empty() {
            return Err(ModelError::Inconsistent("no class labels".into()));
        }
        if self.feature_means.len() != FEATURE_COUNT || self.feature_stds.len() != FEATURE_COUNT {
            return Err(ModelError::Inconsistent(format!(
                "normalization statistics must cover {} features, got {}/{}",
                FEATURE_COUNT,
                self.feature_means.len(),
                self.feature_stds.len()
            )));
        }
        if self.coefficients.nrows() != self.classes.len()
            || self.coefficients.ncols() != FEATURE_COUNT
        {
            return Err(ModelError::Inconsistent(format!(
                "coefficient matrix is {}x{}, expected {}x{}",
                self.coefficients.nrows(),
                self.coefficients.ncols(),
                self.classes.len(),
                FEATURE_COUNT
            )));
        }
        if self.intercepts.len() != self.classes.len() {
            return Err(ModelError::Inconsistent(format!(
                "expected {} intercepts, got {}",
                self.classes.len(),
                self.intercepts.len()
            )));
        }
        if self
            .feature_stds
            .iter()
            .any(|&std| !std.is_finite() || std <= 0.0)
        {
            return Err(ModelError::Inconsistent(
                "feature standard deviations must be finite and positive".into(),
            ));
        }
        Ok(())
    }
}

/// Numerically stable softmax.
fn softmax(scores: Array1<f64>) -> Array1<f64> {
    let max = scores.fold(f64::NEG_INFINITY, |acc, &score| acc.max(score));
    let exp = scores.mapv(|score| (score - max).exp());
    let sum = exp.sum();
    exp / sum
}
