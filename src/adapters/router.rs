//! Route table.
//!
//! Routes are matched literally except for the trailing `{section}` segment of
//! the docs route. `OPTIONS` and `HEAD` never reach this table; see
//! [`preflight_middleware`](crate::adapters::middleware::preflight_middleware)
//! and [`head_not_found_middleware`](crate::adapters::middleware::head_not_found_middleware).
use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;

use crate::adapters::{
    http_handler::{self as handlers, ApiState},
    middleware::{
        cors_headers_middleware, head_not_found_middleware, preflight_middleware,
        request_id_middleware, request_timing_middleware,
    },
};

/// Every (method, path) pair served, in the order logged at startup.
pub const ENDPOINTS: [(&str, &str); 11] = [
    ("OPTIONS", "*"),
    ("GET", "/"),
    ("GET", "/api/v1/hello"),
    ("GET", "/api/v1/stats"),
    ("GET", "/api/v1/examples"),
    ("GET", "/api/v1/benchmarks"),
    ("GET", "/api/v1/features"),
    ("POST", "/api/v1/subscribe"),
    ("POST", "/api/v1/contact"),
    ("GET", "/api/health"),
    ("GET", "/api/v1/docs/{section}"),
];

/// Build the API routes without state applied.
pub(crate) fn api_routes() -> Router<ApiState> {
    Router::new()
        .route("/", get(handlers::root))
        .route("/api/health", get(handlers::health))
        .route("/api/v1/hello", get(handlers::hello))
        .route("/api/v1/stats", get(handlers::stats))
        .route("/api/v1/examples", get(handlers::examples))
        .route("/api/v1/benchmarks", get(handlers::benchmarks))
        .route("/api/v1/features", get(handlers::features))
        .route("/api/v1/subscribe", post(handlers::subscribe))
        .route("/api/v1/contact", post(handlers::contact))
        .route("/api/v1/docs/{section}", get(handlers::docs))
}

/// Build the complete router: routes, fallback and the middleware stack.
pub fn build_router(state: ApiState) -> Router {
    api_routes()
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::not_found)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(middleware::from_fn(request_timing_middleware))
                .layer(CompressionLayer::new())
                .layer(middleware::from_fn(cors_headers_middleware))
                .layer(middleware::from_fn(preflight_middleware))
                .layer(middleware::from_fn(head_not_found_middleware)),
        )
}
