use super::shared::SharedDomainData;
use crate::ports::DnsResolver;
use dnsrecon_domain::{DnsAnswer, DnsQuery, LookupError, RecordType};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Everything one lookup task needs; cloned into every spawned task.
#[derive(Clone)]
pub(crate) struct LookupContext {
    pub resolver: Arc<dyn DnsResolver>,
    pub domain: Arc<str>,
    pub shared: SharedDomainData,
    pub retry_delay: Duration,
}

impl LookupContext {
    pub async fn query(&self, name: &str, record_type: RecordType) -> Result<DnsAnswer, LookupError> {
        self.resolver
            .resolve(&DnsQuery::new(name, record_type))
            .await
    }

    /// One more try after `retry_delay` when the first query fails.
    pub async fn query_with_retry(
        &self,
        name: &str,
        record_type: RecordType,
    ) -> Result<DnsAnswer, LookupError> {
        match self.query(name, record_type).await {
            Ok(answer) => Ok(answer),
            Err(error) => {
                debug!(
                    name = %name,
                    record_type = %record_type,
                    error = %error,
                    delay_ms = self.retry_delay.as_millis() as u64,
                    "Lookup failed, retrying once"
                );
                tokio::time::sleep(self.retry_delay).await;
                self.query(name, record_type).await
            }
        }
    }
}
