use super::builders::response_for;
use async_trait::async_trait;
use bytes::Bytes;
use dnsrecon_infrastructure::dns::transport::{DnsTransport, TransportError, TransportResponse};
use hickory_proto::op::ResponseCode;
use hickory_proto::rr::Record;
use std::collections::VecDeque;
use std::io;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// What the next `send` does.
#[derive(Clone)]
pub enum Outcome {
    Answer(Vec<Record>),
    Authority(Vec<Record>),
    Rcode(ResponseCode),
    Timeout,
    ConnectionReset,
    ConnectionRefused,
    Garbage,
}

/// Transport replaying a script of outcomes. Once the script runs out every
/// query gets an empty NOERROR answer.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    script: Arc<Mutex<VecDeque<Outcome>>>,
    servers: Arc<Mutex<Vec<SocketAddr>>>,
}

impl ScriptedTransport {
    pub fn new(script: Vec<Outcome>) -> Self {
        Self {
            script: Arc::new(Mutex::new(script.into())),
            servers: Arc::default(),
        }
    }

    pub fn push(&self, outcome: Outcome) {
        self.script.lock().unwrap().push_back(outcome);
    }

    /// Servers contacted so far, in order.
    pub fn servers(&self) -> Vec<SocketAddr> {
        self.servers.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.servers.lock().unwrap().len()
    }
}

#[async_trait]
impl DnsTransport for ScriptedTransport {
    async fn send(
        &self,
        server: SocketAddr,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, TransportError> {
        self.servers.lock().unwrap().push(server);
        let outcome = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Outcome::Answer(Vec::new()));

        let bytes = match outcome {
            Outcome::Answer(records) => {
                response_for(message_bytes, ResponseCode::NoError, records, Vec::new())
            }
            Outcome::Authority(records) => {
                response_for(message_bytes, ResponseCode::NoError, Vec::new(), records)
            }
            Outcome::Rcode(rcode) => response_for(message_bytes, rcode, Vec::new(), Vec::new()),
            Outcome::Timeout => return Err(TransportError::Timeout { server, timeout }),
            Outcome::ConnectionReset => {
                return Err(TransportError::from_io(
                    server,
                    timeout,
                    io::Error::from(io::ErrorKind::ConnectionReset),
                ))
            }
            Outcome::ConnectionRefused => {
                return Err(TransportError::from_io(
                    server,
                    timeout,
                    io::Error::from(io::ErrorKind::ConnectionRefused),
                ))
            }
            Outcome::Garbage => vec![0xde, 0xad],
        };

        Ok(TransportResponse {
            bytes: Bytes::from(bytes),
            protocol_used: "SCRIPTED",
        })
    }
}
