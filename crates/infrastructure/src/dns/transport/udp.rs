use super::{message_id, TransportError, TransportResponse};
use bytes::Bytes;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// DNS over UDP, one ephemeral socket per query.
pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    /// Sends the query and waits for the response carrying the same ID.
    /// Datagrams from other sources or with other IDs are skipped.
    pub async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, TransportError> {
        match tokio::time::timeout(timeout, self.exchange(message_bytes, timeout)).await {
            Ok(result) => result,
            Err(_) => Err(TransportError::Timeout {
                server: self.server_addr,
                timeout,
            }),
        }
    }

    async fn exchange(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, TransportError> {
        let io_error = |e: std::io::Error| TransportError::from_io(self.server_addr, timeout, e);

        let bind_addr = if self.server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        };
        let socket = UdpSocket::bind(bind_addr).await.map_err(io_error)?;

        let bytes_sent = socket
            .send_to(message_bytes, self.server_addr)
            .await
            .map_err(io_error)?;
        debug!(server = %self.server_addr, bytes_sent, "UDP query sent");

        let expected_id = message_id(message_bytes);
        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        loop {
            let (bytes_received, from_addr) =
                socket.recv_from(&mut recv_buf).await.map_err(io_error)?;

            if from_addr.ip() != self.server_addr.ip() {
                warn!(
                    expected = %self.server_addr,
                    received_from = %from_addr,
                    "UDP response from unexpected source"
                );
                continue;
            }
            if message_id(&recv_buf[..bytes_received]) != expected_id {
                debug!(server = %self.server_addr, "Ignoring UDP response with stale ID");
                continue;
            }

            debug!(server = %self.server_addr, bytes_received, "UDP response received");
            return Ok(TransportResponse {
                bytes: Bytes::copy_from_slice(&recv_buf[..bytes_received]),
                protocol_used: "UDP",
            });
        }
    }
}
