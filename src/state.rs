use crate::inference::model::PowerModel;
use crate::inference::scaler::Scaler;
use std::sync::Arc;

/// Process-wide application state: the two artifacts loaded at startup.
///
/// Both are read-only for the process lifetime, so the state is shared as a
/// plain `Arc` with no interior mutability.
#[derive(Debug)]
pub struct AppState {
    app_name: String,
    scaler: Arc<dyn Scaler>,
    model: Arc<dyn PowerModel>,
}

impl AppState {
    pub fn new(app_name: String, scaler: Arc<dyn Scaler>, model: Arc<dyn PowerModel>) -> Self {
        Self {
            app_name,
            scaler,
            model,
        }
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn scaler(&self) -> &dyn Scaler {
        self.scaler.as_ref()
    }

    pub fn model(&self) -> &dyn PowerModel {
        self.model.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::model::{LinearRegressor, LinearRegressorParams};
    use crate::inference::scaler::{StandardScaler, StandardScalerParams};

    #[test]
    fn state_exposes_loaded_artifact_kinds() -> Result<(), Box<dyn std::error::Error>> {
        let scaler = StandardScaler::new(StandardScalerParams {
            mean: vec![0.0; 7],
            scale: vec![1.0; 7],
        })?;
        let model = LinearRegressor::new(LinearRegressorParams {
            coefficients: vec![0.0; 7],
            intercept: 0.0,
        })?;

        let state = AppState::new("solar-forecast".to_string(), Arc::new(scaler), Arc::new(model));

        assert_eq!(state.app_name(), "solar-forecast");
        assert_eq!(state.scaler().kind(), "standard");
        assert_eq!(state.model().kind(), "linear");
        Ok(())
    }
}
