use async_trait::async_trait;
use dnsrecon_application::ports::DnsResolver;
use dnsrecon_domain::{
    normalize_name, DnsAnswer, DnsQuery, DnsRecord, LookupError, RecordData, RecordType,
};
use std::collections::{HashMap, HashSet};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::Arc;
use tokio::sync::RwLock;

type Key = (String, RecordType);

// ============================================================================
// Mock DnsResolver
// ============================================================================

/// Scripted resolver. Unscripted queries answer NOERROR with no records.
#[derive(Clone, Default)]
pub struct MockDnsResolver {
    responses: Arc<RwLock<HashMap<Key, Result<DnsAnswer, LookupError>>>>,
    failures_left: Arc<RwLock<HashMap<Key, usize>>>,
    panics: Arc<RwLock<HashSet<Key>>>,
    calls: Arc<RwLock<HashMap<Key, usize>>>,
}

impl MockDnsResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_answer(&self, name: &str, record_type: RecordType, records: Vec<DnsRecord>) {
        self.responses
            .write()
            .await
            .insert(key(name, record_type), Ok(DnsAnswer::new(records)));
    }

    pub async fn set_response(
        &self,
        name: &str,
        record_type: RecordType,
        response: Result<DnsAnswer, LookupError>,
    ) {
        self.responses
            .write()
            .await
            .insert(key(name, record_type), response);
    }

    pub async fn set_error(&self, name: &str, record_type: RecordType, error: LookupError) {
        self.set_response(name, record_type, Err(error)).await;
    }

    /// The first `times` queries for the key time out, later ones follow the script.
    pub async fn fail_first(&self, name: &str, record_type: RecordType, times: usize) {
        self.failures_left
            .write()
            .await
            .insert(key(name, record_type), times);
    }

    pub async fn panic_on(&self, name: &str, record_type: RecordType) {
        self.panics.write().await.insert(key(name, record_type));
    }

    pub async fn calls(&self, name: &str, record_type: RecordType) -> usize {
        self.calls
            .read()
            .await
            .get(&key(name, record_type))
            .copied()
            .unwrap_or(0)
    }

    pub async fn total_calls(&self) -> usize {
        self.calls.read().await.values().sum()
    }

    pub async fn calls_for_type(&self, record_type: RecordType) -> usize {
        self.calls
            .read()
            .await
            .iter()
            .filter(|((_, rt), _)| *rt == record_type)
            .map(|(_, count)| count)
            .sum()
    }
}

#[async_trait]
impl DnsResolver for MockDnsResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<DnsAnswer, LookupError> {
        let key = key(&query.domain, query.record_type);
        *self.calls.write().await.entry(key.clone()).or_insert(0) += 1;

        if self.panics.read().await.contains(&key) {
            panic!("scripted panic for {}", query.cache_key());
        }

        if let Some(left) = self.failures_left.write().await.get_mut(&key) {
            if *left > 0 {
                *left -= 1;
                return Err(LookupError::Timeout);
            }
        }

        self.responses
            .read()
            .await
            .get(&key)
            .cloned()
            .unwrap_or_else(|| Ok(DnsAnswer::default()))
    }
}

fn key(name: &str, record_type: RecordType) -> Key {
    (normalize_name(name), record_type)
}

// ============================================================================
// Record builders
// ============================================================================

pub fn a_record(name: &str, ip: [u8; 4]) -> DnsRecord {
    DnsRecord::new(name, RecordData::A(Ipv4Addr::from(ip)))
}

pub fn aaaa_record(name: &str, ip: Ipv6Addr) -> DnsRecord {
    DnsRecord::new(name, RecordData::AAAA(ip))
}

pub fn cname_record(name: &str, target: &str) -> DnsRecord {
    DnsRecord::new(name, RecordData::CNAME(target.to_string()))
}

pub fn ns_record(name: &str, host: &str) -> DnsRecord {
    DnsRecord::new(name, RecordData::NS(host.to_string()))
}

pub fn mx_record(name: &str, preference: u16, exchange: &str) -> DnsRecord {
    DnsRecord::new(
        name,
        RecordData::MX {
            preference,
            exchange: exchange.to_string(),
        },
    )
}

pub fn soa_record(name: &str, mname: &str, rname: &str) -> DnsRecord {
    DnsRecord::new(
        name,
        RecordData::SOA {
            mname: mname.to_string(),
            rname: rname.to_string(),
        },
    )
}

pub fn txt_record(name: &str, strings: &[&str]) -> DnsRecord {
    DnsRecord::new(
        name,
        RecordData::TXT(strings.iter().map(|s| s.to_string()).collect()),
    )
}

/// A domain with a SOA whose primary nameserver resolves to 192.0.2.53.
pub async fn delegated_domain(resolver: &MockDnsResolver, domain: &str) {
    let ns = format!("ns1.{}", domain);
    resolver
        .set_answer(
            domain,
            RecordType::SOA,
            vec![soa_record(domain, &ns, &format!("hostmaster.{}", domain))],
        )
        .await;
    resolver
        .set_answer(&ns, RecordType::A, vec![a_record(&ns, [192, 0, 2, 53])])
        .await;
}
