//! Linear regression power model.
//!
//! Prediction: dot(coefficients, features) + intercept, over features that
//! have already been normalized by the scaler.

use crate::error::InferenceError;
use crate::inference::ArtifactError;
use serde::Deserialize;

/// A fitted regression function mapping a normalized feature record to one
/// scalar power estimate.
///
/// Implementations are selected via the `kind` field of the model artifact
/// and loaded once at startup.
pub trait PowerModel: Send + Sync + std::fmt::Debug {
    /// Predicts DC power (kW) from a normalized feature record. Must reject
    /// records whose length differs from the fitted feature count.
    fn predict(&self, features: &[f64]) -> Result<f64, InferenceError>;

    /// Artifact kind name, as written in the artifact file.
    fn kind(&self) -> &'static str;
}

/// Fitted parameters of the linear regression artifact.
#[derive(Debug, Clone, Deserialize)]
pub struct LinearRegressorParams {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

#[derive(Debug)]
pub struct LinearRegressor {
    params: LinearRegressorParams,
}

impl LinearRegressor {
    pub fn new(params: LinearRegressorParams) -> Result<Self, ArtifactError> {
        if params.coefficients.is_empty() {
            return Err(ArtifactError::Invalid(
                "model coefficient vector is empty".to_string(),
            ));
        }
        if params.coefficients.iter().any(|c| !c.is_finite()) || !params.intercept.is_finite() {
            return Err(ArtifactError::Invalid(
                "model parameters contain a non-finite entry".to_string(),
            ));
        }
        Ok(Self { params })
    }
}

impl PowerModel for LinearRegressor {
    fn predict(&self, features: &[f64]) -> Result<f64, InferenceError> {
        if features.len() != self.params.coefficients.len() {
            return Err(InferenceError::ArityMismatch {
                expected: self.params.coefficients.len(),
                actual: features.len(),
            });
        }

        let prediction = features
            .iter()
            .zip(&self.params.coefficients)
            .map(|(x, coefficient)| x * coefficient)
            .sum::<f64>()
            + self.params.intercept;

        if prediction.is_finite() {
            Ok(prediction)
        } else {
            Err(InferenceError::NonFinite { stage: "predict" })
        }
    }

    fn kind(&self) -> &'static str {
        "linear"
    }
}
