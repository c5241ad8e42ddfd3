use crate::models::MetricKind;
use axum::http::StatusCode;
use thiserror::Error;

/// Failures at the health-provider boundary. The aggregator degrades every
/// variant to an empty series; none of these reach HTTP responses directly.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("read authorization was denied")]
    Unauthorized,

    #[error("metric {0:?} is not supported by this provider")]
    UnsupportedMetric(MetricKind),

    #[error("statistics query failed: {0}")]
    QueryFailed(String),
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            message: message.into(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
