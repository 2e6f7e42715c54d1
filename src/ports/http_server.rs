use eyre::Result;
use thiserror::Error;

use crate::core::Rejection;

/// Error type for HTTP handler operations.
///
/// Every variant is scoped to the single request that produced it. The HTTP
/// mapping lives in `adapters::response`.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum HandlerError {
    /// Missing or malformed input. Answered with 400 and a `ResponseDto`.
    #[error("Request rejected: {0}")]
    Rejected(#[from] Rejection),
    /// The outgoing DTO could not be encoded. Answered with 500.
    #[error("Internal serialization error: {0}")]
    Serialization(String),
    /// No route matched. Answered with an empty 404.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<serde_json::Error> for HandlerError {
    fn from(err: serde_json::Error) -> Self {
        HandlerError::Serialization(err.to_string())
    }
}

/// HttpServer defines the port (interface) for running the HTTP surface
pub trait HttpServer: Send + Sync + 'static {
    /// Run the HTTP server
    ///
    /// # Returns
    /// A future that resolves when the server shuts down or encounters an error
    fn run(self) -> impl std::future::Future<Output = Result<()>> + Send;
}
