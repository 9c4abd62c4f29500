//! Standard (mean/variance) feature scaler.
//!
//! Transform: `(x - mean) / scale`, applied per feature. Parameters come
//! from the fitted scaler artifact and are frozen for the process lifetime.

use crate::error::InferenceError;
use crate::inference::ArtifactError;
use serde::Deserialize;

/// A fitted normalization transform applied before prediction.
///
/// Implementations are selected via the `kind` field of the scaler artifact
/// and loaded once at startup.
pub trait Scaler: Send + Sync + std::fmt::Debug {
    /// Normalizes a feature record to the distribution the model was
    /// trained on. Must reject records whose length differs from the
    /// fitted feature count.
    fn transform(&self, features: &[f64]) -> Result<Vec<f64>, InferenceError>;

    /// Artifact kind name, as written in the artifact file.
    fn kind(&self) -> &'static str;
}

/// Fitted parameters of the standard scaler artifact.
#[derive(Debug, Clone, Deserialize)]
pub struct StandardScalerParams {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

#[derive(Debug)]
pub struct StandardScaler {
    params: StandardScalerParams,
}

impl StandardScaler {
    pub fn new(params: StandardScalerParams) -> Result<Self, ArtifactError> {
        if params.mean.is_empty() {
            return Err(ArtifactError::Invalid(
                "scaler mean vector is empty".to_string(),
            ));
        }
        if params.mean.len() != params.scale.len() {
            return Err(ArtifactError::Invalid(format!(
                "scaler mean has {} entries but scale has {}",
                params.mean.len(),
                params.scale.len()
            )));
        }
        if params.mean.iter().any(|m| !m.is_finite()) {
            return Err(ArtifactError::Invalid(
                "scaler mean contains a non-finite entry".to_string(),
            ));
        }
        if params.scale.iter().any(|s| !s.is_finite() || *s == 0.0) {
            return Err(ArtifactError::Invalid(
                "scaler scale contains a zero or non-finite entry".to_string(),
            ));
        }
        Ok(Self { params })
    }

    /// Feature count the scaler was fitted with.
    pub fn fitted_len(&self) -> usize {
        self.params.mean.len()
    }
}

impl Scaler for StandardScaler {
    fn transform(&self, features: &[f64]) -> Result<Vec<f64>, InferenceError> {
        if features.len() != self.params.mean.len() {
            return Err(InferenceError::ArityMismatch {
                expected: self.params.mean.len(),
                actual: features.len(),
            });
        }

        Ok(features
            .iter()
            .zip(&self.params.mean)
            .zip(&self.params.scale)
            .map(|((x, mean), scale)| (x - mean) / scale)
            .collect())
    }

    fn kind(&self) -> &'static str {
        "standard"
    }
}
