use std::net::{Ipv4Addr, Ipv6Addr};

/// Record payloads the recon engine understands. Everything else is `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    AAAA(Ipv6Addr),
    CNAME(String),
    NS(String),
    MX { preference: u16, exchange: String },
    SOA { mname: String, rname: String },
    TXT(Vec<String>),
    Other,
}

/// One resource record, owner name already normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecord {
    pub name: String,
    pub data: RecordData,
}

impl DnsRecord {
    pub fn new(name: impl Into<String>, data: RecordData) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }
}

/// Protocol-neutral view of a successful (NOERROR) response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DnsAnswer {
    pub answers: Vec<DnsRecord>,
    pub authority: Vec<DnsRecord>,
}

impl DnsAnswer {
    pub fn new(answers: Vec<DnsRecord>) -> Self {
        Self {
            answers,
            authority: Vec::new(),
        }
    }

    pub fn with_authority(mut self, authority: Vec<DnsRecord>) -> Self {
        self.authority = authority;
        self
    }

    pub fn ipv4_addresses(&self) -> Vec<Ipv4Addr> {
        self.answers
            .iter()
            .filter_map(|r| match r.data {
                RecordData::A(ip) => Some(ip),
                _ => None,
            })
            .collect()
    }

    pub fn ipv6_addresses(&self) -> Vec<Ipv6Addr> {
        self.answers
            .iter()
            .filter_map(|r| match r.data {
                RecordData::AAAA(ip) => Some(ip),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_extraction_skips_other_records() {
        let answer = DnsAnswer::new(vec![
            DnsRecord::new("www.example.com", RecordData::CNAME("example.com".into())),
            DnsRecord::new("example.com", RecordData::A(Ipv4Addr::new(192, 0, 2, 1))),
            DnsRecord::new("example.com", RecordData::AAAA(Ipv6Addr::LOCALHOST)),
        ]);

        assert_eq!(answer.ipv4_addresses(), vec![Ipv4Addr::new(192, 0, 2, 1)]);
        assert_eq!(answer.ipv6_addresses(), vec![Ipv6Addr::LOCALHOST]);
    }
}
