use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

/// Local DNS server answering every query with one A record (93.184.216.34).
///
/// With `truncate_udp` the UDP side only returns an empty response with the
/// TC bit set and the full answer is served over TCP on the same port.
pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(truncate_udp: bool) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;
        let listener = TcpListener::bind(addr).await?;

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            let response = if truncate_udp {
                                Self::build_truncated_response(&buf[..len])
                            } else {
                                Self::build_mock_response(&buf[..len])
                            };
                            let _ = socket.send_to(&response, peer).await;
                        }
                    }
                    accepted = listener.accept() => {
                        if let Ok((stream, _)) = accepted {
                            tokio::spawn(Self::serve_tcp(stream));
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    async fn serve_tcp(mut stream: tokio::net::TcpStream) {
        let Ok(len) = stream.read_u16().await else {
            return;
        };
        let mut query = vec![0u8; len as usize];
        if stream.read_exact(&mut query).await.is_err() {
            return;
        }
        let response = Self::build_mock_response(&query);
        let mut framed = (response.len() as u16).to_be_bytes().to_vec();
        framed.extend_from_slice(&response);
        let _ = stream.write_all(&framed).await;
    }

    pub fn build_mock_response(query: &[u8]) -> Vec<u8> {
        if query.len() < 12 {
            return vec![];
        }

        let mut response = Vec::with_capacity(512);

        response.extend_from_slice(&query[0..2]); // Transaction ID

        // Flags: QR=1 (response), RD=1, RA=1
        response.push(0x81);
        response.push(0x80);

        response.extend_from_slice(&query[4..6]); // Questions
        response.extend_from_slice(&[0x00, 0x01]); // Answers: 1
        response.extend_from_slice(&[0x00, 0x00]); // Authority: 0
        response.extend_from_slice(&[0x00, 0x00]); // Additional: 0

        response.extend_from_slice(&query[12..]);

        // A record 93.184.216.34 for the question name
        response.extend_from_slice(&[
            0xc0, 0x0c, // Name pointer to question
            0x00, 0x01, // Type A
            0x00, 0x01, // Class IN
            0x00, 0x00, 0x00, 0x3c, // TTL: 60 seconds
            0x00, 0x04, // Data length
            93, 184, 216, 34,
        ]);

        response
    }

    fn build_truncated_response(query: &[u8]) -> Vec<u8> {
        if query.len() < 12 {
            return vec![];
        }

        let mut response = Vec::with_capacity(query.len());
        response.extend_from_slice(&query[0..2]);
        // QR=1, TC=1, RD=1 / RA=1
        response.push(0x83);
        response.push(0x80);
        response.extend_from_slice(&query[4..6]);
        response.extend_from_slice(&[0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);
        response.extend_from_slice(&query[12..]);
        response
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
