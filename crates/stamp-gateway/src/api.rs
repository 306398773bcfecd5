//! Handlers for `/timestamp`.

use crate::error::{GatewayError, GatewayResult};
use crate::GatewayState;
use axum::{
    body::to_bytes,
    extract::{Extension, Request},
    http::{header, HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
};
use stamp_common::{ParseTimestampError, UnixTimestamp};
use std::sync::Arc;

/// Dispatch on method: POST writes, GET reads, anything else is refused.
///
/// ANY /timestamp
pub async fn timestamp(
    Extension(state): Extension<Arc<GatewayState>>,
    request: Request,
) -> Response {
    let result = match *request.method() {
        Method::POST => post_timestamp(&state, request).await.map(IntoResponse::into_response),
        Method::GET => get_timestamp(&state, request.method())
            .await
            .map(IntoResponse::into_response),
        _ => Err(GatewayError::MethodNotAllowed),
    };
    result.unwrap_or_else(IntoResponse::into_response)
}

/// Store a new timestamp.
///
/// POST /timestamp, `Content-Type: text/plain`, body is decimal Unix seconds.
/// Responds 200 with an empty body.
pub async fn post_timestamp(state: &GatewayState, request: Request) -> GatewayResult<StatusCode> {
    if request.method() != Method::POST {
        return Err(GatewayError::MethodNotAllowed);
    }
    if !is_text_plain(request.headers()) {
        return Err(GatewayError::UnsupportedMediaType);
    }

    let body = to_bytes(request.into_body(), state.max_body_bytes)
        .await
        .map_err(|_| GatewayError::BodyUnreadable)?;
    let text = std::str::from_utf8(&body).map_err(|_| {
        ParseTimestampError::InvalidDigit(String::from_utf8_lossy(&body).into_owned())
    })?;
    let value: UnixTimestamp = text.parse()?;

    state.owner.set(value).await?;
    Ok(StatusCode::OK)
}

/// Read the stored timestamp.
///
/// GET /timestamp. Responds 200, `Content-Type: text/plain`, body is
/// decimal Unix seconds.
pub async fn get_timestamp(
    state: &GatewayState,
    method: &Method,
) -> GatewayResult<impl IntoResponse> {
    if method != Method::GET {
        return Err(GatewayError::MethodNotAllowed);
    }

    let value = state.owner.get().await?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain")],
        value.to_string(),
    ))
}

/// Anything outside `/timestamp`.
pub async fn not_routed() -> GatewayError {
    GatewayError::MethodNotAllowed
}

/// Content type is exactly `text/plain`. Parameters or other casing are refused.
fn is_text_plain(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .is_some_and(|v| v.as_bytes() == b"text/plain")
}
