//! TCP listener with backpressure.
//!
//! # Responsibilities
//! - Enforce `listener.max_connections` via a semaphore
//! - Keep the slot occupied for the connection's lifetime
//! - Graceful handling of accept errors

use std::io;
use std::net::SocketAddr;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Duration;

use tokio::io::{AsyncRead, AsyncWrite, ReadBuf};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

/// TCP listener that caps concurrent connections.
///
/// A semaphore slot is taken before each accept and held until the connection
/// closes. Once the cap is reached, further accepts wait for a free slot.
pub struct BoundedListener {
    inner: TcpListener,
    connection_limit: Arc<Semaphore>,
    max_connections: usize,
}

impl BoundedListener {
    /// Wrap a bound listener with a connection cap.
    pub fn new(inner: TcpListener, max_connections: usize) -> Self {
        Self {
            inner,
            connection_limit: Arc::new(Semaphore::new(max_connections)),
            max_connections,
        }
    }

    /// Currently free connection slots.
    pub fn available_permits(&self) -> usize {
        self.connection_limit.available_permits()
    }

    /// Configured maximum connections.
    pub fn max_connections(&self) -> usize {
        self.max_connections
    }
}

impl axum::serve::Listener for BoundedListener {
    type Io = PermittedStream;
    type Addr = SocketAddr;

    async fn accept(&mut self) -> (Self::Io, Self::Addr) {
        // Slot first (backpressure), then the socket.
        let permit = self
            .connection_limit
            .clone()
            .acquire_owned()
            .await
            .expect("Semaphore closed unexpectedly");

        loop {
            match self.inner.accept().await {
                Ok((stream, addr)) => {
                    tracing::debug!(
                        peer_addr = %addr,
                        available_permits = self.connection_limit.available_permits(),
                        "Connection accepted"
                    );
                    return (
                        PermittedStream {
                            inner: stream,
                            _permit: permit,
                        },
                        addr,
                    );
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to accept connection");
                    tokio::time::sleep(Duration::from_millis(50)).await;
                }
            }
        }
    }

    fn local_addr(&self) -> io::Result<SocketAddr> {
        self.inner.local_addr()
    }
}

/// An accepted connection plus the slot it occupies.
///
/// Dropping the stream releases the slot, even if the task handling the
/// connection aborted.
pub struct PermittedStream {
    inner: TcpStream,
    _permit: OwnedSemaphorePermit,
}

impl AsyncRead for PermittedStream {
    fn poll_read(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        Pin::new(&mut self.inner).poll_read(cx, buf)
    }
}

impl AsyncWrite for PermittedStream {
    fn poll_write(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        Pin::new(&mut self.inner).poll_write(cx, buf)
    }

    fn poll_flush(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Pin::new(&mut self.inner).poll_flush(cx)
    }

    fn poll_shutdown(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Pin::new(&mut self.inner).poll_shutdown(cx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::serve::Listener as _;

    #[tokio::test]
    async fn test_permit_held_for_connection_lifetime() {
        let tcp = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = tcp.local_addr().unwrap();
        let mut listener = BoundedListener::new(tcp, 2);
        assert_eq!(listener.available_permits(), 2);
        assert_eq!(listener.max_connections(), 2);

        let client = TcpStream::connect(addr).await.unwrap();
        let (stream, _peer) = listener.accept().await;
        assert_eq!(listener.available_permits(), 1);

        drop(stream);
        assert_eq!(listener.available_permits(), 2);
        drop(client);
    }
}
