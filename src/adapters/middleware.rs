//! Router-wide middleware.
//!
//! Layer order (outermost first): request id, timing, compression, cross-origin
//! headers, pre-flight, HEAD gate. Pre-flight and the HEAD gate therefore
//! short-circuit before any handler runs, while still receiving the
//! cross-origin headers and being timed.
use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    http::{HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::Instrument;

use crate::{adapters::response, ports::HandlerError, tracing_setup};

/// Metric label for requests that matched no route.
pub const UNMATCHED_PATH_LABEL: &str = "unmatched";

/// Attach the three cross-origin headers to every response coming out of the
/// router, overwriting whatever a handler set.
pub async fn cors_headers_middleware(req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;
    response::apply_cors_headers(response.headers_mut());
    response
}

/// Answer every `OPTIONS` request with 204 and an empty body, whatever the
/// path. Nothing downstream runs.
pub async fn preflight_middleware(req: Request, next: Next) -> Response {
    if *req.method() == Method::OPTIONS {
        tracing::debug!("Pre-flight for {}", req.uri().path());
        return response::build_empty(StatusCode::NO_CONTENT);
    }
    next.run(req).await
}

/// Answer `HEAD` with 404. axum serves `HEAD` from every `GET` route, but no
/// `HEAD` endpoint exists here.
pub async fn head_not_found_middleware(req: Request, next: Next) -> Response {
    if *req.method() == Method::HEAD {
        return HandlerError::NotFound(req.uri().path().to_string()).into_response();
    }
    next.run(req).await
}

/// Route template used as the `path` metric label, so captured segments and
/// unknown paths do not create new label sets.
fn metric_path_label(req: &Request) -> String {
    req.extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_string())
        .unwrap_or_else(|| UNMATCHED_PATH_LABEL.to_string())
}

/// Log start/end of a request including latency, and feed the metric facade.
pub async fn request_timing_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let label = metric_path_label(&req);
    let _timer = crate::metrics::RequestTimer::new(&label, method.as_str());

    tracing::debug!("Started processing {} {}", method, path);

    let response = next.run(req).await;
    let duration = start.elapsed();
    let status = response.status();

    let span = tracing::Span::current();
    span.record("http.status_code", status.as_u16());
    span.record("duration_ms", duration.as_millis() as u64);

    crate::metrics::increment_request_total(&label, method.as_str(), status.as_u16());
    tracing::info!("Completed {} {} - {} in {:?}", method, path, status, duration);

    response
}

/// Generate a per-request UUID and expose it via tracing plus `X-Request-ID`.
pub async fn request_id_middleware(req: Request, next: Next) -> Response {
    let request_id = uuid::Uuid::new_v4().to_string();
    let span =
        tracing_setup::create_request_span(req.method().as_str(), req.uri().path(), &request_id);

    let mut response = next.run(req).instrument(span).await;

    if let Ok(header_value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert("X-Request-ID", header_value);
    }

    response
}

#[cfg(test)]
mod tests {
    use axum::{
        Router,
        body::Body,
        http::StatusCode,
        middleware,
        routing::get,
    };
    use tower::ServiceExt; // for oneshot

    use super::*;

    fn app() -> Router {
        Router::new()
            .route(
                "/",
                get(|| async {
                    axum::response::Response::builder()
                        .status(StatusCode::OK)
                        .header("access-control-allow-origin", "https://evil.example")
                        .body(Body::empty())
                        .unwrap()
                }),
            )
            .layer(middleware::from_fn(preflight_middleware))
            .layer(middleware::from_fn(cors_headers_middleware))
            .layer(middleware::from_fn(request_id_middleware))
    }

    #[tokio::test]
    async fn test_cors_headers_overwrite_handler_values() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let headers = response.headers();

        assert_eq!(headers.get("access-control-allow-origin").unwrap(), "*");
        assert_eq!(
            headers.get_all("access-control-allow-origin").iter().count(),
            1
        );
    }

    #[tokio::test]
    async fn test_preflight_short_circuits_routing() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(
            response.headers().get("access-control-allow-methods").unwrap(),
            "GET, POST, PUT, DELETE, OPTIONS"
        );
    }

    #[tokio::test]
    async fn test_head_is_not_found() {
        let app = Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(middleware::from_fn(head_not_found_middleware));
        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::HEAD)
                    .uri("/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    async fn echo_label(req: Request, next: Next) -> Response {
        let label = metric_path_label(&req);
        let mut response = next.run(req).await;
        response
            .headers_mut()
            .insert("x-path-label", HeaderValue::from_str(&label).unwrap());
        response
    }

    #[tokio::test]
    async fn test_metric_label_uses_route_template() {
        let app = Router::new()
            .route("/docs/{section}", get(|| async { "doc" }))
            .fallback(|| async { StatusCode::NOT_FOUND })
            .layer(middleware::from_fn(echo_label));

        for (uri, expected) in [
            ("/docs/networking", "/docs/{section}"),
            ("/docs/anything-else", "/docs/{section}"),
            ("/no/such/path", UNMATCHED_PATH_LABEL),
        ] {
            let response = app
                .clone()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.headers().get("x-path-label").unwrap(), expected);
        }
    }

    #[tokio::test]
    async fn test_request_id_middleware() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let headers = response.headers();

        assert!(headers.contains_key("X-Request-ID"));

        // Verify it's a valid UUID
        let request_id = headers.get("X-Request-ID").unwrap().to_str().unwrap();
        assert!(uuid::Uuid::parse_str(request_id).is_ok());
    }
}
