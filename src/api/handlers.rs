use crate::api::responses::{
    HealthResponse, HealthStatus, PredictErrorCode, PredictErrorResponse, PredictSuccessResponse,
    format_power_kw,
};
use crate::error::InferenceError;
use crate::features::{FeatureRecord, SensorReadings};
use crate::inference::predict_power;
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use std::sync::Arc;
use std::time::SystemTime;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, Time};
use tracing::{error, warn};

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Body of `POST /api/predict`. Date and time arrive as the plain strings
/// the form widgets produce.
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub date: String,
    pub time: String,
    pub irradiation: f64,
    pub module_temperature: f64,
    pub ambient_temperature: f64,
}

pub enum PredictResponse {
    Success(PredictSuccessResponse),
    Error {
        status: StatusCode,
        body: PredictErrorResponse,
    },
}

impl IntoResponse for PredictResponse {
    fn into_response(self) -> Response {
        match self {
            PredictResponse::Success(body) => (StatusCode::OK, Json(body)).into_response(),
            PredictResponse::Error { status, body } => (status, Json(body)).into_response(),
        }
    }
}

pub async fn post_predict(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PredictRequest>,
) -> impl IntoResponse {
    build_predict_response(&state, &request, SystemTime::now())
}

pub async fn get_health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    build_health_response(&state, SystemTime::now())
}

fn build_predict_response(
    state: &AppState,
    request: &PredictRequest,
    now: SystemTime,
) -> PredictResponse {
    match run_inference(state, request) {
        Ok(predicted_kw) => success_response(predicted_kw, now),
        Err(err) => {
            warn!(error = %err, "Prediction request failed");
            inference_failed_response(err, now)
        }
    }
}

fn run_inference(state: &AppState, request: &PredictRequest) -> Result<f64, InferenceError> {
    let date = parse_date(&request.date)?;
    let time = parse_time(&request.time)?;
    let readings = SensorReadings::new(
        request.irradiation,
        request.module_temperature,
        request.ambient_temperature,
    )?;
    let record = FeatureRecord::build(date, time, readings);
    predict_power(state.scaler(), state.model(), &record)
}

fn parse_date(raw: &str) -> Result<Date, InferenceError> {
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(raw, format).map_err(|_| InferenceError::InvalidDate(raw.to_string()))
}

fn parse_time(raw: &str) -> Result<Time, InferenceError> {
    let format = format_description!("[hour]:[minute]");
    Time::parse(raw, format).map_err(|_| InferenceError::InvalidTime(raw.to_string()))
}

fn success_response(predicted_kw: f64, timestamp: SystemTime) -> PredictResponse {
    match format_timestamp(timestamp) {
        Ok(formatted) => PredictResponse::Success(PredictSuccessResponse {
            predicted_dc_power_kw: predicted_kw,
            display: format_power_kw(predicted_kw),
            timestamp: formatted,
        }),
        Err(_err) => internal_error("timestamp formatting failure"),
    }
}

fn inference_failed_response(err: InferenceError, timestamp: SystemTime) -> PredictResponse {
    match format_timestamp(timestamp) {
        Ok(formatted) => PredictResponse::Error {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            body: PredictErrorResponse {
                error_code: PredictErrorCode::InferenceFailed,
                error_message: err.to_string(),
                timestamp: formatted,
            },
        },
        Err(_err) => internal_error("timestamp formatting failure"),
    }
}

fn internal_error(message: &str) -> PredictResponse {
    error!(
        message = message,
        "Internal error while handling /api/predict"
    );
    let formatted = fallback_timestamp();
    PredictResponse::Error {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        body: PredictErrorResponse {
            error_code: PredictErrorCode::InternalError,
            error_message: INTERNAL_ERROR_MESSAGE.to_string(),
            timestamp: formatted,
        },
    }
}

fn build_health_response(state: &AppState, now: SystemTime) -> Json<HealthResponse> {
    let timestamp = format_timestamp(now).unwrap_or_else(|err| {
        error!(error = %err, "Failed to format health timestamp");
        fallback_timestamp()
    });
    Json(HealthResponse {
        status: HealthStatus::Ok,
        scaler: state.scaler().kind().to_string(),
        model: state.model().kind().to_string(),
        timestamp,
    })
}

fn format_timestamp(timestamp: SystemTime) -> Result<String, time::error::Format> {
    let datetime = OffsetDateTime::from(timestamp);
    datetime.format(&Rfc3339)
}

fn fallback_timestamp() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "1970-01-01T00:00:00Z".to_string())
}
