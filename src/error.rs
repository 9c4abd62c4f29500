use thiserror::Error;

/// Failure while turning a prediction request into a power estimate.
///
/// The HTTP layer reports all of these under a single error code; the
/// variants exist so messages can name what actually went wrong.
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("invalid {field} reading {value}: must be a non-negative number")]
    InvalidReading { field: &'static str, value: f64 },
    #[error("invalid date {0:?}: expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("invalid time {0:?}: expected HH:MM")]
    InvalidTime(String),
    #[error("feature record has {actual} values but the artifact was fitted with {expected}")]
    ArityMismatch { expected: usize, actual: usize },
    #[error("{stage} produced a non-finite value")]
    NonFinite { stage: &'static str },
}
