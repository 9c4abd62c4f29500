use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PredictSuccessResponse {
    pub predicted_dc_power_kw: f64,
    /// Value formatted for the result panel, e.g. "123.46 kW".
    pub display: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PredictErrorResponse {
    pub error_code: PredictErrorCode,
    pub error_message: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PredictErrorCode {
    /// Any failure while building the record, scaling, or predicting.
    InferenceFailed,
    InternalError,
}

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct HealthResponse {
    pub status: HealthStatus,
    /// Kind of the loaded scaler artifact.
    pub scaler: String,
    /// Kind of the loaded model artifact.
    pub model: String,
    pub timestamp: String,
}

/// Formats a predicted power value the way the result panel shows it.
pub fn format_power_kw(value: f64) -> String {
    format!("{value:.2} kW")
}
