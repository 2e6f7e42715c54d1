//! Response envelope construction.
//!
//! Handlers hand a DTO and a status to [`build_success`]. A [`Rejection`]
//! returned as [`HandlerError::Rejected`] ends up in [`build_rejection`].
//! Cross-origin headers are attached here as well as by the router-wide
//! middleware, so a response built outside the router carries them too.
use axum::{
    body::Body,
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::{core::Rejection, dto::ResponseDto, ports::HandlerError};

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type, Authorization";

const SERIALIZATION_FAILURE_BODY: &str = "Internal serialization error";

/// Insert the three cross-origin headers, replacing any existing values.
pub fn apply_cors_headers(headers: &mut HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ALLOW_ORIGIN),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
}

/// Serialize `dto` as JSON with the given status.
pub fn build_success<T: Serialize>(dto: &T, status: StatusCode) -> Result<Response, HandlerError> {
    let body = serde_json::to_vec(dto)?;
    Ok(json_response(status, body))
}

/// `{"success":false,"message":<reason>}` with status 400.
pub fn build_rejection(reason: Rejection) -> Response {
    tracing::debug!(%reason, "Request rejected");
    crate::metrics::increment_validation_rejection(&reason.to_string());

    match build_success(&ResponseDto::failure(reason.to_string()), StatusCode::BAD_REQUEST) {
        Ok(response) => response,
        Err(e) => serialization_failure(&e),
    }
}

/// Plain-text response.
pub fn build_text(status: StatusCode, text: &'static str) -> Response {
    let mut response = Response::new(Body::from(text));
    *response.status_mut() = status;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    apply_cors_headers(response.headers_mut());
    response
}

/// Empty-bodied response with cross-origin headers.
pub fn build_empty(status: StatusCode) -> Response {
    let mut response = Response::new(Body::empty());
    *response.status_mut() = status;
    apply_cors_headers(response.headers_mut());
    response
}

fn json_response(status: StatusCode, body: Vec<u8>) -> Response {
    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    apply_cors_headers(response.headers_mut());
    response
}

fn serialization_failure(err: &dyn std::fmt::Display) -> Response {
    tracing::error!("Failed to serialize response: {}", err);
    build_text(StatusCode::INTERNAL_SERVER_ERROR, SERIALIZATION_FAILURE_BODY)
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        match self {
            HandlerError::Rejected(reason) => build_rejection(reason),
            HandlerError::Serialization(msg) => serialization_failure(&msg),
            HandlerError::NotFound(path) => {
                tracing::debug!("No route for {}", path);
                build_empty(StatusCode::NOT_FOUND)
            }
        }
    }
}
