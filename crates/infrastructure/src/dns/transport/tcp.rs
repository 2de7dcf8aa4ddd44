use super::{TransportError, TransportResponse};
use bytes::Bytes;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

/// DNS over TCP: two-byte length prefix on both directions.
pub struct TcpTransport {
    server_addr: SocketAddr,
}

impl TcpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    pub async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, TransportError> {
        match tokio::time::timeout(timeout, self.exchange(message_bytes)).await {
            Ok(result) => result.map_err(|e| TransportError::from_io(self.server_addr, timeout, e)),
            Err(_) => Err(TransportError::Timeout {
                server: self.server_addr,
                timeout,
            }),
        }
    }

    async fn exchange(&self, message_bytes: &[u8]) -> io::Result<TransportResponse> {
        let length = u16::try_from(message_bytes.len())
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "DNS message too large"))?;

        let mut stream = TcpStream::connect(self.server_addr).await?;
        let mut framed = Vec::with_capacity(message_bytes.len() + 2);
        framed.extend_from_slice(&length.to_be_bytes());
        framed.extend_from_slice(message_bytes);
        stream.write_all(&framed).await?;
        debug!(server = %self.server_addr, bytes_sent = framed.len(), "TCP query sent");

        let response_len = stream.read_u16().await? as usize;
        let mut response = vec![0u8; response_len];
        stream.read_exact(&mut response).await?;
        debug!(server = %self.server_addr, bytes_received = response_len, "TCP response received");

        Ok(TransportResponse {
            bytes: Bytes::from(response),
            protocol_used: "TCP",
        })
    }
}
