use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use healthbridge_core::HealthError;
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Health(#[from] HealthError),
    #[error("{0}")]
    BadRequest(String),
}

#[derive(Serialize)]
struct ErrorBody {
    code: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Health(e) if e.is_caller_error() => StatusCode::BAD_REQUEST,
            ApiError::Health(HealthError::Timeout { .. }) => StatusCode::GATEWAY_TIMEOUT,
            ApiError::Health(_) => StatusCode::BAD_GATEWAY,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::Health(e) => e.code(),
            ApiError::BadRequest(_) => "BAD_REQUEST",
        }
    }

    fn details(&self) -> Option<Value> {
        let ApiError::Health(e) = self else {
            return None;
        };
        match e {
            HealthError::UnresolvedKey { key, table } => Some(json!({"key": key, "table": table})),
            HealthError::QueryFailed { data_type, .. }
            | HealthError::PersistFailed { data_type, .. } => Some(json!({"dataType": data_type})),
            HealthError::InvalidArgument { name, .. } => Some(json!({"argument": name})),
            HealthError::UnsupportedMethod(method) => Some(json!({"method": method})),
            HealthError::Timeout {
                operation,
                timeout_ms,
            } => Some(json!({"operation": operation, "timeoutMs": timeout_ms})),
            HealthError::Provider { provider, .. } => Some(json!({"provider": provider})),
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!("{} {}: {}", status.as_u16(), self.code(), self);
        }
        let body = Json(ErrorBody {
            code: self.code().to_string(),
            message: self.to_string(),
            details: self.details(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
