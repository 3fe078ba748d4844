use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use thiserror::Error;

/// The two error kinds the relay reports: a missing required field from the
/// caller, or a failed call to Zoho. Upstream failures forward the upstream
/// status and payload when available and fall back to a generic 500.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    ClientInput(String),
    #[error("upstream request failed (status {status:?})")]
    Upstream {
        status: Option<u16>,
        payload: Option<Value>,
    },
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Upstream {
            status: err.status().map(|s| s.as_u16()),
            payload: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::ClientInput(message) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": message })),
            )
                .into_response(),
            ApiError::Upstream { status, payload } => {
                let status = status
                    .and_then(|code| StatusCode::from_u16(code).ok())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                let payload =
                    payload.unwrap_or_else(|| Value::String("Internal Server Error".to_string()));
                (status, Json(json!({ "error": payload }))).into_response()
            }
        }
    }
}
