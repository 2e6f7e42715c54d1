//! [`HttpServer`] implementation on top of `axum::serve`.
use std::{net::SocketAddr, sync::Arc};

use eyre::{Result, WrapErr};

use crate::{
    adapters::{
        http_handler::ApiState,
        listener::TrackingListener,
        router::{ENDPOINTS, build_router},
    },
    config::ServerConfig,
    core::UsageMetrics,
    ports::HttpServer,
    utils::GracefulShutdown,
};

pub struct ShowcaseServer {
    config: Arc<ServerConfig>,
    usage: Arc<UsageMetrics>,
    shutdown: Arc<GracefulShutdown>,
}

impl ShowcaseServer {
    pub fn new(
        config: Arc<ServerConfig>,
        usage: Arc<UsageMetrics>,
        shutdown: Arc<GracefulShutdown>,
    ) -> Self {
        Self {
            config,
            usage,
            shutdown,
        }
    }

    /// Bind the configured address without serving yet.
    pub async fn bind(&self) -> Result<TrackingListener> {
        let addr: SocketAddr = self
            .config
            .listen_addr
            .parse()
            .wrap_err_with(|| format!("Failed to parse listen address {}", self.config.listen_addr))?;

        TrackingListener::bind(addr, self.usage.clone())
            .await
            .wrap_err_with(|| format!("Failed to bind to address {addr}"))
    }

    /// Serve on an already bound listener until shutdown, then drain.
    pub async fn serve(self, listener: TrackingListener) -> Result<()> {
        use axum::serve::Listener;

        let local_addr = listener.local_addr().wrap_err("Failed to get local addr")?;
        log_endpoints(&local_addr);

        let state = ApiState::new(self.usage.clone(), self.config.showcase.clone());
        let router = build_router(state);

        let shutdown_for_serve = self.shutdown.clone();
        let mut server_task = tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async move {
                    shutdown_for_serve.wait_for_shutdown_signal().await;
                })
                .await
        });

        tokio::select! {
            result = &mut server_task => {
                return result.wrap_err("Server task panicked")?.wrap_err("Server error");
            }
            reason = self.shutdown.wait_for_shutdown_signal() => {
                tracing::info!(
                    "Shutdown signal received: {:?}, draining {} connection(s)",
                    reason,
                    self.usage.active_connections()
                );
            }
        }

        let drain_timeout = self.shutdown.shutdown_timeout();
        match tokio::time::timeout(drain_timeout, &mut server_task).await {
            Ok(result) => {
                result.wrap_err("Server task panicked")?.wrap_err("Server error")?;
                tracing::info!("Graceful shutdown completed");
            }
            Err(_) => {
                tracing::warn!(
                    "Drain timeout exceeded: {} connection(s) still open after {:?}",
                    self.usage.active_connections(),
                    drain_timeout
                );
                server_task.abort();
            }
        }

        Ok(())
    }
}

impl HttpServer for ShowcaseServer {
    async fn run(self) -> Result<()> {
        let listener = self.bind().await?;
        self.serve(listener).await
    }
}

fn log_endpoints(local_addr: &SocketAddr) {
    tracing::info!("======================================");
    tracing::info!("Showcase API listening on {}", local_addr);
    tracing::info!("======================================");
    tracing::info!("Endpoints available:");
    for (method, path) in ENDPOINTS {
        tracing::info!("  {:<7} {}", method, path);
    }
    tracing::info!("======================================");
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpStream,
    };

    use super::*;
    use crate::utils::ShutdownReason;

    fn test_server() -> (ShowcaseServer, Arc<GracefulShutdown>) {
        let config = ServerConfig::builder()
            .listen_addr("127.0.0.1:0")
            .shutdown_timeout_secs(1)
            .build();
        let shutdown = Arc::new(GracefulShutdown::with_timeout(Duration::from_secs(1)));
        let server = ShowcaseServer::new(
            Arc::new(config),
            Arc::new(UsageMetrics::record_start()),
            shutdown.clone(),
        );
        (server, shutdown)
    }

    #[tokio::test]
    async fn test_bind_rejects_bad_address() {
        let config = ServerConfig::builder().listen_addr("not-an-address").build();
        let server = ShowcaseServer::new(
            Arc::new(config),
            Arc::new(UsageMetrics::record_start()),
            Arc::new(GracefulShutdown::new()),
        );
        assert!(server.bind().await.is_err());
    }

    #[tokio::test]
    async fn test_serves_until_shutdown() {
        use axum::serve::Listener;

        let (server, shutdown) = test_server();
        let listener = server.bind().await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(server.serve(listener));

        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream
            .write_all(b"GET /api/health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();
        let mut raw = String::new();
        stream.read_to_string(&mut raw).await.unwrap();
        assert!(raw.starts_with("HTTP/1.1 200"), "{raw}");
        assert!(raw.contains("Server is healthy"));

        shutdown.trigger_shutdown(ShutdownReason::Graceful);
        let result = tokio::time::timeout(Duration::from_secs(5), handle)
            .await
            .unwrap()
            .unwrap();
        assert!(result.is_ok());
    }
}
