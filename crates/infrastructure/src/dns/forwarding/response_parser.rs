use dnsrecon_domain::{normalize_name, DnsAnswer, DnsRecord, RecordData};
use hickory_proto::op::Message;
use hickory_proto::rr::{RData, Record};
use hickory_proto::ProtoError;
use tracing::debug;

/// Decoded response: header fields plus the records the engine reads.
#[derive(Debug, Clone)]
pub struct ParsedResponse {
    pub id: u16,
    pub rcode: u16,
    pub truncated: bool,
    pub answer: DnsAnswer,
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<ParsedResponse, ProtoError> {
        let message = Message::from_vec(response_bytes)?;

        let answers: Vec<DnsRecord> = message.answers().iter().map(Self::convert).collect();
        let authority: Vec<DnsRecord> =
            message.name_servers().iter().map(Self::convert).collect();

        let rcode = u16::from(message.response_code());
        debug!(
            rcode,
            answers = answers.len(),
            authority = authority.len(),
            truncated = message.truncated(),
            "DNS response parsed"
        );

        Ok(ParsedResponse {
            id: message.id(),
            rcode,
            truncated: message.truncated(),
            answer: DnsAnswer::new(answers).with_authority(authority),
        })
    }

    /// Names come out normalized: lower-case, no trailing dot.
    fn convert(record: &Record) -> DnsRecord {
        let data = match record.data() {
            RData::A(a) => RecordData::A(a.0),
            RData::AAAA(aaaa) => RecordData::AAAA(aaaa.0),
            RData::CNAME(cname) => RecordData::CNAME(normalize_name(&cname.to_utf8())),
            RData::NS(ns) => RecordData::NS(normalize_name(&ns.to_utf8())),
            RData::MX(mx) => RecordData::MX {
                preference: mx.preference(),
                exchange: normalize_name(&mx.exchange().to_utf8()),
            },
            RData::SOA(soa) => RecordData::SOA {
                mname: normalize_name(&soa.mname().to_utf8()),
                rname: normalize_name(&soa.rname().to_utf8()),
            },
            RData::TXT(txt) => RecordData::TXT(
                txt.txt_data()
                    .iter()
                    .map(|s| String::from_utf8_lossy(s).into_owned())
                    .collect(),
            ),
            _ => RecordData::Other,
        };

        DnsRecord::new(normalize_name(&record.name().to_utf8()), data)
    }
}
