use async_trait::async_trait;
use dnsrecon_domain::{DnsAnswer, DnsQuery, LookupError};

/// One DNS client as seen by the resolution engine: a single question in,
/// a successful answer or a classified lookup error out.
#[async_trait]
pub trait DnsResolver: Send + Sync {
    async fn resolve(&self, query: &DnsQuery) -> Result<DnsAnswer, LookupError>;
}
