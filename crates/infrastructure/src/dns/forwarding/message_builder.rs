//! Recursive query messages in wire format.

use super::record_type_map::RecordTypeMapper;
use dnsrecon_domain::DnsQuery;
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use hickory_proto::ProtoError;
use std::str::FromStr;

pub struct MessageBuilder;

impl MessageBuilder {
    /// Builds a query with a random ID, the RD flag and a single IN question
    /// for the fully qualified name. Returns the ID with the bytes.
    pub fn build_query(query: &DnsQuery) -> Result<(u16, Vec<u8>), ProtoError> {
        let name = Name::from_str(&query.fqdn())?;

        let mut question = Query::new();
        question.set_name(name);
        question.set_query_type(RecordTypeMapper::to_hickory(query.record_type));
        question.set_query_class(DNSClass::IN);

        let id = fastrand::u16(..);
        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(question);

        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);
        message.emit(&mut encoder)?;

        Ok((id, buf))
    }
}
