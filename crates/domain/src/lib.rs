//! dnsrecon domain layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod domain_data;
pub mod errors;

pub use config::{CliOverrides, Config, ConfigError, Resolver, ResolverSet, RetryResolver};
pub use dns_query::{fqdn, normalize_name, DnsQuery};
pub use dns_record::{DnsAnswer, DnsRecord, RecordData, RecordType};
pub use domain_data::{DomainData, DomainStatus, IpSet, Records, SoaData};
pub use errors::LookupError;
