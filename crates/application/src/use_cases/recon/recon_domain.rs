use super::get_dns_data::GetDnsDataUseCase;
use crate::ports::DnsResolver;
use crate::services::{ClientPool, PoolError};
use dnsrecon_domain::DomainData;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, instrument, warn};

pub type SharedResolver = Arc<dyn DnsResolver>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconError {
    #[error("no DNS client available: {0}")]
    PoolExhausted(PoolError),

    #[error("no second DNS client available for retry: {0}")]
    RetryTimeout(PoolError),
}

/// Request-scoped resolution: borrows a client from the pool and, when the
/// result is the generic `ERROR`, tries once more with a different client.
pub struct ReconDomainUseCase {
    pool: Arc<ClientPool<SharedResolver>>,
    engine: GetDnsDataUseCase,
    checkout_timeout: Duration,
    retry_checkout_timeout: Duration,
}

impl ReconDomainUseCase {
    pub fn new(pool: Arc<ClientPool<SharedResolver>>, engine: GetDnsDataUseCase) -> Self {
        Self {
            pool,
            engine,
            checkout_timeout: Duration::from_secs(40),
            retry_checkout_timeout: Duration::from_secs(5),
        }
    }

    pub fn with_timeouts(mut self, checkout: Duration, retry_checkout: Duration) -> Self {
        self.checkout_timeout = checkout;
        self.retry_checkout_timeout = retry_checkout;
        self
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, domain: &str) -> Result<DomainData, ReconError> {
        let client = self
            .pool
            .checkout(self.checkout_timeout)
            .await
            .map_err(ReconError::PoolExhausted)?;

        let data = self.engine.execute(Arc::clone(&client), domain).await;
        if !data.status.is_generic_error() {
            return Ok(data);
        }

        // The first client stays checked out so the retry lands on another one.
        warn!(domain = %domain, "Resolution failed, retrying with another client");
        let retry_client = self
            .pool
            .checkout(self.retry_checkout_timeout)
            .await
            .map_err(ReconError::RetryTimeout)?;

        let data = self.engine.execute(Arc::clone(&retry_client), domain).await;
        info!(domain = %domain, status = %data.status, "Retry finished");
        Ok(data)
    }
}
