//! Request rejections and their HTTP mapping.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use stamp_common::ParseTimestampError;
use stamp_owner::OwnerError;
use thiserror::Error;
use tracing::debug;

/// Why a request to `/timestamp` was not served.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Wrong method for the path or handler.
    #[error("method not allowed")]
    MethodNotAllowed,

    /// POST without a `text/plain` content type.
    #[error("unsupported content type")]
    UnsupportedMediaType,

    /// The request body could not be read in full.
    #[error("failed to read body")]
    BodyUnreadable,

    /// The body is not a base-10 signed 64-bit integer.
    #[error("invalid unix timestamp")]
    InvalidTimestamp(#[from] ParseTimestampError),

    /// The owner task has stopped.
    #[error("timestamp owner unavailable")]
    OwnerUnavailable,

    /// The owner did not reply within the configured timeout.
    #[error("timestamp owner timed out")]
    OwnerTimeout,
}

impl From<OwnerError> for GatewayError {
    fn from(err: OwnerError) -> Self {
        match err {
            OwnerError::Closed => Self::OwnerUnavailable,
            OwnerError::Timeout(_) => Self::OwnerTimeout,
        }
    }
}

impl GatewayError {
    /// Status code sent for this rejection.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::BodyUnreadable | Self::InvalidTimestamp(_) => StatusCode::BAD_REQUEST,
            Self::OwnerUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::OwnerTimeout => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        debug!(status = status.as_u16(), error = ?self, "Request rejected");

        let mut response = (status, self.to_string()).into_response();
        if status == StatusCode::METHOD_NOT_ALLOWED {
            response
                .headers_mut()
                .insert(header::ALLOW, HeaderValue::from_static("GET, POST"));
        }
        response
    }
}

/// Convenience type alias for gateway handlers.
pub type GatewayResult<T> = Result<T, GatewayError>;
