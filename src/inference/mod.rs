//! Artifact loading and the inference pipeline.
//!
//! The scaler and model are serialized as JSON files of the shape
//! `{ "kind": "<name>", "params": { ... } }`. Both are loaded once at
//! startup and held immutably for the process lifetime; a missing or
//! incompatible artifact is a startup failure.

use crate::error::InferenceError;
use crate::features::FeatureRecord;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

pub mod model;
pub mod scaler;

use model::{LinearRegressor, LinearRegressorParams, PowerModel};
use scaler::{Scaler, StandardScaler, StandardScalerParams};

/// On-disk envelope shared by both artifact files.
#[derive(Debug, Deserialize)]
pub struct ArtifactFile {
    pub kind: String,
    pub params: serde_json::Value,
}

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read artifact file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse artifact file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid artifact: {0}")]
    Invalid(String),
}

// Artifact factories
pub fn create_scaler(file: &ArtifactFile) -> Result<Box<dyn Scaler>, ArtifactError> {
    match file.kind.as_str() {
        "standard" => {
            let params: StandardScalerParams = serde_json::from_value(file.params.clone())?;
            Ok(Box::new(StandardScaler::new(params)?))
        }
        other => Err(ArtifactError::Invalid(format!(
            "unknown scaler kind: {other}"
        ))),
    }
}

pub fn create_model(file: &ArtifactFile) -> Result<Box<dyn PowerModel>, ArtifactError> {
    match file.kind.as_str() {
        "linear" => {
            let params: LinearRegressorParams = serde_json::from_value(file.params.clone())?;
            Ok(Box::new(LinearRegressor::new(params)?))
        }
        other => Err(ArtifactError::Invalid(format!(
            "unknown model kind: {other}"
        ))),
    }
}

pub fn load_scaler_from_path(path: impl AsRef<Path>) -> Result<Box<dyn Scaler>, ArtifactError> {
    let contents = std::fs::read_to_string(path)?;
    let file: ArtifactFile = serde_json::from_str(&contents)?;
    create_scaler(&file)
}

pub fn load_model_from_path(path: impl AsRef<Path>) -> Result<Box<dyn PowerModel>, ArtifactError> {
    let contents = std::fs::read_to_string(path)?;
    let file: ArtifactFile = serde_json::from_str(&contents)?;
    create_model(&file)
}

/// Runs the full inference pass: scale the record, then predict.
pub fn predict_power(
    scaler: &dyn Scaler,
    model: &dyn PowerModel,
    record: &FeatureRecord,
) -> Result<f64, InferenceError> {
    let scaled = scaler.transform(&record.to_vec())?;
    model.predict(&scaled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::SensorReadings;
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};
    use time::macros::{date, time};

    fn write_temp_artifact(label: &str, contents: &str) -> std::path::PathBuf {
        let unique = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before unix epoch")
            .as_nanos();
        let path = std::env::temp_dir().join(format!("solar-forecast-{label}-{unique}.json"));
        fs::write(&path, contents).expect("write temp artifact");
        path
    }

    #[test]
    fn standard_scaler_artifact_round_trips_through_loader() {
        let path = write_temp_artifact(
            "scaler",
            r#"{
                "kind": "standard",
                "params": {
                    "mean": [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
                    "scale": [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0]
                }
            }"#,
        );

        let scaler = load_scaler_from_path(&path);
        let _ = fs::remove_file(&path);

        let scaler = scaler.expect("scaler should load");
        assert_eq!(scaler.kind(), "standard");
    }

    #[test]
    fn unknown_scaler_kind_is_invalid() {
        let file = ArtifactFile {
            kind: "minmax".to_string(),
            params: serde_json::json!({}),
        };

        assert!(matches!(
            create_scaler(&file),
            Err(ArtifactError::Invalid(_))
        ));
    }

    #[test]
    fn unknown_model_kind_is_invalid() {
        let file = ArtifactFile {
            kind: "random_forest".to_string(),
            params: serde_json::json!({}),
        };

        assert!(matches!(create_model(&file), Err(ArtifactError::Invalid(_))));
    }

    #[test]
    fn missing_artifact_file_returns_read_error() {
        let unique = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before unix epoch")
            .as_nanos();
        let path = std::env::temp_dir().join(format!("solar-forecast-missing-{unique}.json"));

        assert!(matches!(
            load_model_from_path(&path),
            Err(ArtifactError::Read(_))
        ));
    }

    #[test]
    fn malformed_artifact_json_returns_parse_error() {
        let path = write_temp_artifact("malformed", "{ not json");

        let result = load_scaler_from_path(&path);
        let _ = fs::remove_file(&path);

        assert!(matches!(result, Err(ArtifactError::Parse(_))));
    }

    #[test]
    fn predict_power_scales_then_predicts() -> Result<(), Box<dyn std::error::Error>> {
        // Identity scaler, coefficient 1.0 on irradiation only.
        let scaler = StandardScaler::new(StandardScalerParams {
            mean: vec![0.0; 7],
            scale: vec![1.0; 7],
        })?;
        let model = LinearRegressor::new(LinearRegressorParams {
            coefficients: vec![1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            intercept: 2.5,
        })?;
        let readings = SensorReadings::new(5.0, 45.0, 30.0)?;
        let record = FeatureRecord::build(date!(2020 - 06 - 15), time!(14:00), readings);

        let prediction = predict_power(&scaler, &model, &record)?;

        assert_eq!(prediction, 7.5);
        Ok(())
    }
}
