use crate::{LookupError, RecordType};
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Addresses of a nameserver or mail exchanger discovered during a lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IpSet {
    pub a: Vec<Ipv4Addr>,
    pub aaaa: Vec<Ipv6Addr>,
}

impl IpSet {
    pub fn is_empty(&self) -> bool {
        self.a.is_empty() && self.aaaa.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SoaData {
    pub name: String,
    #[serde(rename = "primary_nameserver")]
    pub nameserver: BTreeMap<String, IpSet>,
    pub mbox: String,
}

/// Records section of `DomainData`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Records {
    pub soa: SoaData,
    pub ns: BTreeMap<String, IpSet>,
    /// Mail exchangers grouped by preference.
    pub mx: BTreeMap<u16, BTreeMap<String, IpSet>>,
    pub txt: Vec<String>,
    pub cname: Vec<String>,
    pub a: Vec<Ipv4Addr>,
    pub aaaa: Vec<Ipv6Addr>,
    /// One entry per discovered redirection chain, keyed by record type.
    pub cname_paths: BTreeMap<String, Vec<Vec<String>>>,
}

/// Overall outcome of a domain resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainStatus {
    NoError,
    /// No authoritative signal and no specific error recorded.
    Error,
    Failed(LookupError),
}

impl DomainStatus {
    /// True for every status reported as `ERROR`, whether or not a lookup
    /// recorded it.
    pub fn is_generic_error(&self) -> bool {
        matches!(
            self,
            DomainStatus::Error | DomainStatus::Failed(LookupError::Failed)
        )
    }
}

impl fmt::Display for DomainStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainStatus::NoError => f.write_str("NOERROR"),
            DomainStatus::Error => f.write_str("ERROR"),
            DomainStatus::Failed(e) => write!(f, "{}", e),
        }
    }
}

impl Serialize for DomainStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Aggregated reconnaissance result for one domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainData {
    pub name: String,
    #[serde(rename = "data")]
    pub records: Records,
    pub timestamp: DateTime<Utc>,
    pub status: DomainStatus,
    pub errors: BTreeMap<String, LookupError>,
}

impl DomainData {
    /// Fresh result stamped with the current UTC time.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: Records::default(),
            timestamp: Utc::now(),
            status: DomainStatus::NoError,
            errors: BTreeMap::new(),
        }
    }

    pub fn record_error(&mut self, record_type: RecordType, error: LookupError) {
        self.errors.insert(record_type.key().to_string(), error);
    }

    pub fn error_for(&self, record_type: RecordType) -> Option<LookupError> {
        self.errors.get(record_type.key()).copied()
    }

    /// Appends one redirection chain; chains for the same type accumulate.
    pub fn push_cname_path(&mut self, record_type: RecordType, path: Vec<String>) {
        if path.is_empty() {
            return;
        }
        self.records
            .cname_paths
            .entry(record_type.key().to_string())
            .or_default()
            .push(path);
    }

    /// True when phase one found a nameserver or an address.
    pub fn has_authority_signal(&self) -> bool {
        !self.records.soa.nameserver.is_empty()
            || !self.records.a.is_empty()
            || !self.records.aaaa.is_empty()
    }

    /// Status for a domain without any authority signal: the first specific
    /// error among SOA, A, AAAA, or the generic `ERROR`.
    pub fn unresolved_status(&self) -> DomainStatus {
        RecordType::PHASE_ONE
            .iter()
            .find_map(|rt| self.error_for(*rt))
            .map(DomainStatus::Failed)
            .unwrap_or(DomainStatus::Error)
    }

    pub fn is_valid(&self) -> bool {
        let r = &self.records;
        if !r.soa.name.is_empty() && !r.soa.nameserver.is_empty() {
            return true;
        }
        !r.ns.is_empty()
            || !r.mx.is_empty()
            || !r.a.is_empty()
            || !r.aaaa.is_empty()
            || !r.cname.is_empty()
            || !r.txt.is_empty()
    }
}

impl Default for DomainData {
    fn default() -> Self {
        Self::new(String::new())
    }
}
