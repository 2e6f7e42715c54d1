//! Showcase API - a small public REST surface serving demonstration data.
//!
//! The service answers a fixed set of read-mostly endpoints (greeting, usage statistics,
//! code examples, benchmark figures, feature list, documentation stubs) and two form
//! endpoints that validate and acknowledge submissions without storing them.
//!
//! # Features
//! - Fixed, ordered catalogs compiled into the binary
//! - Live usage statistics backed by lock-free process-wide counters
//! - Uniform cross-origin headers and method-agnostic pre-flight handling
//! - Form validation with stable, human-readable rejection messages
//! - Metrics facade (Prometheus style) & structured tracing via `tracing`
//! - Graceful shutdown & connection tracking
//!
//! # Quick Example
//! ```no_run
//! use std::sync::Arc;
//!
//! use showcase_api::{ShowcaseServer, UsageMetrics, config::ServerConfig, ports::HttpServer};
//! use showcase_api::utils::GracefulShutdown;
//!
//! # #[tokio::main] async fn main() -> eyre::Result<()> {
//! let cfg: ServerConfig = showcase_api::config::load_or_default("showcase.toml").await?;
//! let server = ShowcaseServer::new(
//!     Arc::new(cfg),
//!     Arc::new(UsageMetrics::record_start()),
//!     Arc::new(GracefulShutdown::new()),
//! );
//! server.run().await?;
//! # Ok(()) }
//! ```
//!
//! # Architecture
//! The crate separates **ports** (traits and the error taxonomy) from **adapters** (axum
//! glue) while keeping transport-free logic inside `core`. DTOs live in `dto` and are the
//! only types that cross the wire.
//!
//! # Error Handling
//! Request-scoped failures are `ports::HandlerError` values and never escape the request
//! that produced them. Startup and configuration APIs return `eyre::Result<T>` with context
//! attached using `WrapErr`.
//!
//! # Concurrency
//! Handlers are stateless apart from `core::UsageMetrics`, whose fields are independent
//! atomics. No lock is held across more than a single field update.
pub mod config;
pub mod dto;
pub mod metrics;
pub mod ports;
pub mod tracing_setup;
pub mod utils;

pub mod adapters;
pub mod core;

pub use crate::{
    adapters::{ApiState, ShowcaseServer, build_router},
    core::UsageMetrics,
    utils::GracefulShutdown,
};
