use crate::directions::RouteSourceError;
use crate::optimizer::OptimizerError;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use smartroute_core::model::scoring::RouteScoringError;

/// a failed request, rendered as `{"detail": message}` with a matching status code.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> ApiError {
        ApiError {
            status,
            detail: detail.into(),
        }
    }
}

impl From<OptimizerError> for ApiError {
    fn from(error: OptimizerError) -> Self {
        let status = match &error {
            OptimizerError::Scoring(RouteScoringError::NoRoutesFound) => StatusCode::NOT_FOUND,
            OptimizerError::Scoring(RouteScoringError::InvalidInput(_)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            OptimizerError::Scoring(RouteScoringError::TrafficSourceFailure(_)) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            OptimizerError::RouteSource(RouteSourceError::Timeout(_)) => {
                StatusCode::GATEWAY_TIMEOUT
            }
            OptimizerError::RouteSource(RouteSourceError::Configuration(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            OptimizerError::RouteSource(_) => StatusCode::BAD_GATEWAY,
        };
        ApiError::new(status, error.to_string())
    }
}

/// a request body that cannot be read as the expected json document
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::new(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::new(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text())
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(error: tokio::task::JoinError) -> Self {
        ApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("request handler failed: {error}"),
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            log::error!("{} {}", self.status, self.detail);
        } else {
            log::warn!("{} {}", self.status, self.detail);
        }
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}
