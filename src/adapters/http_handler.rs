//! Endpoint handlers.
//!
//! Each handler except [`root`] bumps the shared request counter, builds its
//! DTO and hands it to the response builder. Handlers share nothing but [`ApiState`].
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{StatusCode, Uri},
    response::Response,
};
use serde::de::DeserializeOwned;

use crate::{
    adapters::response::{build_success, build_text},
    config::ShowcaseConfig,
    core::{Rejection, UsageMetrics, catalog, validate_contact, validate_subscription},
    dto::{ContactDto, MessageDto, ResponseDto, StatsDto, SubscribeDto},
    ports::HandlerError,
};

/// State shared by every handler. Cheap to clone.
#[derive(Clone)]
pub struct ApiState {
    pub usage: Arc<UsageMetrics>,
    pub showcase: Arc<ShowcaseConfig>,
}

impl ApiState {
    pub fn new(usage: Arc<UsageMetrics>, showcase: ShowcaseConfig) -> Self {
        Self {
            usage,
            showcase: Arc::new(showcase),
        }
    }
}

type HandlerResult = Result<Response, HandlerError>;

/// Plain-text greeting. Not counted in `totalRequests`.
pub async fn root() -> Response {
    build_text(StatusCode::OK, catalog::ROOT_GREETING)
}

pub async fn hello(State(state): State<ApiState>) -> HandlerResult {
    state.usage.increment_requests();
    let dto = MessageDto {
        message: format!("Hello from {}! 🚀", state.showcase.framework),
        framework: state.showcase.framework.clone(),
        version: state.showcase.framework_version.clone(),
    };
    build_success(&dto, StatusCode::OK)
}

pub async fn stats(State(state): State<ApiState>) -> HandlerResult {
    let total_requests = state.usage.increment_requests();
    let dto = StatsDto {
        total_requests,
        uptime_seconds: state.usage.current_uptime_seconds(),
        version: state.showcase.framework_version.clone(),
        memory_usage_mb: state.usage.synthetic_memory_usage_mb(),
        active_connections: state.usage.active_connections(),
    };
    build_success(&dto, StatusCode::OK)
}

pub async fn examples(State(state): State<ApiState>) -> HandlerResult {
    state.usage.increment_requests();
    build_success(&catalog::examples(), StatusCode::OK)
}

pub async fn benchmarks(State(state): State<ApiState>) -> HandlerResult {
    state.usage.increment_requests();
    build_success(&catalog::benchmarks(), StatusCode::OK)
}

pub async fn features(State(state): State<ApiState>) -> HandlerResult {
    state.usage.increment_requests();
    build_success(&catalog::features(), StatusCode::OK)
}

pub async fn health(State(state): State<ApiState>) -> HandlerResult {
    state.usage.increment_requests();
    build_success(&ResponseDto::ok(catalog::HEALTHY_MESSAGE), StatusCode::OK)
}

pub async fn docs(State(state): State<ApiState>, Path(section): Path<String>) -> HandlerResult {
    state.usage.increment_requests();
    build_success(&catalog::docs_section(&section), StatusCode::OK)
}

pub async fn subscribe(State(state): State<ApiState>, body: Bytes) -> HandlerResult {
    state.usage.increment_requests();

    let dto: SubscribeDto = decode_body(&body)?;
    validate_subscription(&dto)?;

    tracing::info!("Newsletter subscription accepted");
    build_success(&ResponseDto::ok(catalog::SUBSCRIBED_MESSAGE), StatusCode::OK)
}

pub async fn contact(State(state): State<ApiState>, body: Bytes) -> HandlerResult {
    state.usage.increment_requests();

    let dto: ContactDto = decode_body(&body)?;
    validate_contact(&dto)?;

    tracing::info!("Contact message accepted");
    build_success(&ResponseDto::ok(catalog::CONTACT_SENT_MESSAGE), StatusCode::OK)
}

/// Fallback for unmatched paths.
pub async fn not_found(uri: Uri) -> HandlerError {
    HandlerError::NotFound(uri.path().to_string())
}

/// Decode a JSON body. The `Content-Type` header is not inspected.
fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, Rejection> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!("Malformed request body: {}", e);
        Rejection::MalformedBody
    })
}
