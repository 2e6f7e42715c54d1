pub mod http_handler;
pub mod listener;
pub mod middleware;
pub mod response;
pub mod router;
pub mod server;

/// Re-export commonly used types from adapters
pub use http_handler::ApiState;
pub use listener::{TrackedStream, TrackingListener};
pub use router::build_router;
pub use server::ShowcaseServer;
