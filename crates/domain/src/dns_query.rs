use super::RecordType;
use std::sync::Arc;

/// DNS query (domain + record type).
/// Uses `Arc<str>` so the fan-out tasks can clone it freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub domain: Arc<str>,
    pub record_type: RecordType,
}

impl DnsQuery {
    pub fn new(domain: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            domain: domain.into(),
            record_type,
        }
    }

    /// `name:TYPE` key shared by every client of the response cache.
    pub fn cache_key(&self) -> String {
        format!(
            "{}:{}",
            normalize_name(&self.domain),
            self.record_type.as_str()
        )
    }

    /// Fully qualified form of the queried name, as sent on the wire.
    pub fn fqdn(&self) -> String {
        fqdn(&self.domain)
    }
}

/// Lower-cases a name and strips trailing dots.
pub fn normalize_name(name: &str) -> String {
    name.trim_end_matches('.').to_ascii_lowercase()
}

pub fn fqdn(name: &str) -> String {
    format!("{}.", normalize_name(name))
}
