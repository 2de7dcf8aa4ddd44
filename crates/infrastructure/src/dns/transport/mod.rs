pub mod tcp;
pub mod udp;

use async_trait::async_trait;
use bytes::Bytes;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;
use tokio::time::Instant;
use tracing::debug;

/// Raw DNS response bytes and the protocol that carried them.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub bytes: Bytes,
    pub protocol_used: &'static str,
}

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("no response from {server} within {timeout:?}")]
    Timeout { server: SocketAddr, timeout: Duration },

    #[error("temporary failure talking to {server}: {source}")]
    Temporary {
        server: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("transport failure talking to {server}: {source}")]
    Fatal {
        server: SocketAddr,
        #[source]
        source: io::Error,
    },
}

impl TransportError {
    /// Sorts an I/O error: timeouts and transient socket conditions are worth
    /// another attempt, everything else is not.
    pub fn from_io(server: SocketAddr, timeout: Duration, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::TimedOut => TransportError::Timeout { server, timeout },
            io::ErrorKind::Interrupted
            | io::ErrorKind::WouldBlock
            | io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::UnexpectedEof => TransportError::Temporary { server, source },
            _ => TransportError::Fatal { server, source },
        }
    }

    pub fn is_retryable(&self) -> bool {
        !matches!(self, TransportError::Fatal { .. })
    }
}

/// Sends one raw query to one server and waits for its response.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        server: SocketAddr,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, TransportError>;
}

/// UDP first, TCP when the UDP response comes back truncated.
#[derive(Debug, Default, Clone, Copy)]
pub struct NetworkTransport;

#[async_trait]
impl DnsTransport for NetworkTransport {
    async fn send(
        &self,
        server: SocketAddr,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, TransportError> {
        let start = Instant::now();
        let response = udp::UdpTransport::new(server)
            .send(message_bytes, timeout)
            .await?;

        if !is_truncated(&response.bytes) {
            return Ok(response);
        }

        debug!(server = %server, "Response truncated (TC bit), retrying via TCP");
        let remaining = timeout
            .checked_sub(start.elapsed())
            .unwrap_or(Duration::from_millis(500));
        tcp::TcpTransport::new(server)
            .send(message_bytes, remaining)
            .await
    }
}

/// TC flag of a wire-format header.
pub fn is_truncated(message: &[u8]) -> bool {
    message.len() > 2 && message[2] & 0x02 != 0
}

/// First two bytes of a wire-format message.
pub(crate) fn message_id(message: &[u8]) -> Option<u16> {
    match message {
        [hi, lo, ..] => Some(u16::from_be_bytes([*hi, *lo])),
        _ => None,
    }
}
