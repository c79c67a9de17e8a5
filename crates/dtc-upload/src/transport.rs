//! Delivery of finalized command streams.

use std::net::SocketAddr;

use async_trait::async_trait;
use dtc_errors::TransportError;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tracing::{debug, trace};

/// Sends one finalized stream to the cockpit receiver.
///
/// One call per upload; the orchestrator never retries.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, payload: &str) -> Result<(), TransportError>;
}

/// Wire frame for a stream: the records wrapped into a JSON array, newline
/// terminated.
pub fn frame(payload: &str) -> String {
    format!("[{payload}]\n")
}

/// One TCP connection per upload: connect, write the frame, close.
#[derive(Debug, Clone)]
pub struct TcpTransport {
    endpoint: SocketAddr,
}

impl TcpTransport {
    pub fn new(endpoint: SocketAddr) -> Self {
        Self { endpoint }
    }

    pub fn endpoint(&self) -> SocketAddr {
        self.endpoint
    }
}

#[async_trait]
impl Transport for TcpTransport {
    async fn send(&self, payload: &str) -> Result<(), TransportError> {
        trace!(endpoint = %self.endpoint, "connecting to receiver");
        let mut stream = TcpStream::connect(self.endpoint)
            .await
            .map_err(|e| TransportError::connect(self.endpoint.to_string(), e.to_string()))?;

        let frame = frame(payload);
        stream
            .write_all(frame.as_bytes())
            .await
            .map_err(|e| TransportError::Send(e.to_string()))?;
        stream
            .shutdown()
            .await
            .map_err(|e| TransportError::Send(e.to_string()))?;

        debug!(endpoint = %self.endpoint, bytes = frame.len(), "command stream sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;
    use tokio::net::TcpListener;

    #[test]
    fn test_frame() {
        assert_eq!(frame(r#"{"a":1},{"b":2}"#), "[{\"a\":1},{\"b\":2}]\n");
    }

    #[tokio::test]
    async fn test_tcp_transport_writes_one_frame() -> Result<(), Box<dyn std::error::Error>> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let transport = TcpTransport::new(listener.local_addr()?);

        let receiver = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await?;
            let mut received = String::new();
            socket.read_to_string(&mut received).await?;
            Ok::<_, std::io::Error>(received)
        });

        transport.send(r#"{"device":17}"#).await?;
        let received = receiver.await??;
        assert_eq!(received, "[{\"device\":17}]\n");
        Ok(())
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_connect_error() -> Result<(), Box<dyn std::error::Error>>
    {
        let endpoint = {
            let listener = TcpListener::bind("127.0.0.1:0").await?;
            listener.local_addr()?
        };
        let result = TcpTransport::new(endpoint).send("{}").await;
        assert!(matches!(result, Err(TransportError::Connect { .. })));
        Ok(())
    }
}
