//! TCP listener that keeps [`UsageMetrics::active_connections`] current.
//!
//! Every accepted stream carries a [`ConnectionGuard`]; hyper drops the stream
//! when the connection ends, which releases the guard.
use std::{
    io,
    net::SocketAddr,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
    time::Duration,
};

use axum::serve::Listener;
use tokio::{
    io::{AsyncRead, AsyncWrite, ReadBuf},
    net::{TcpListener, TcpStream},
};

use crate::core::{ConnectionGuard, UsageMetrics};

pub struct TrackingListener {
    inner: TcpListener,
    usage: Arc<UsageMetrics>,
}

impl TrackingListener {
    pub fn new(inner: TcpListener, usage: Arc<UsageMetrics>) -> Self {
        Self { inner, usage }
    }

    pub async fn bind(addr: SocketAddr, usage: Arc<UsageMetrics>) -> io::Result<Self> {
        let inner = TcpListener::bind(addr).await?;
        Ok(Self::new(inner, usage))
    }
}

impl Listener for TrackingListener {
    type Io = TrackedStream;
    type Addr = SocketAddr;

    async fn accept(&mut self) -> (Self::Io, Self::Addr) {
        loop {
            match self.inner.accept().await {
                Ok((stream, addr)) => {
                    let guard = self.usage.connection_opened();
                    tracing::debug!(
                        "Connection opened: remote_addr={}, active={}",
                        addr,
                        self.usage.active_connections()
                    );
                    return (
                        TrackedStream {
                            inner: stream,
                            _guard: guard,
                        },
                        addr,
                    );
                }
                Err(e) => {
                    // Usually resource exhaustion (EMFILE); back off instead of spinning.
                    tracing::warn!("Accept error: {}", e);
                    tokio::time::sleep(Duration::from_millis(100)).await;
                }
            }
        }
    }

    fn local_addr(&self) -> io::Result<Self::Addr> {
        self.inner.local_addr()
    }
}

/// A TCP stream that counts as one active connection until dropped.
pub struct TrackedStream {
    inner: TcpStream,
    _guard: ConnectionGuard,
}

impl AsyncRead for TrackedStream {
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        Pin::new(&mut self.get_mut().inner).poll_read(cx, buf)
    }
}

impl AsyncWrite for TrackedStream {
    fn poll_write(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        Pin::new(&mut self.get_mut().inner).poll_write(cx, buf)
    }

    fn poll_flush(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Pin::new(&mut self.get_mut().inner).poll_flush(cx)
    }

    fn poll_shutdown(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Pin::new(&mut self.get_mut().inner).poll_shutdown(cx)
    }

    fn poll_write_vectored(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        bufs: &[io::IoSlice<'_>],
    ) -> Poll<io::Result<usize>> {
        Pin::new(&mut self.get_mut().inner).poll_write_vectored(cx, bufs)
    }

    fn is_write_vectored(&self) -> bool {
        self.inner.is_write_vectored()
    }
}
