use super::cache::ResponseCache;
use super::forwarding::{MessageBuilder, ResponseParser};
use super::rate_limiter::{RateLimiter, DEFAULT_BURST};
use super::transport::{DnsTransport, TransportError};
use async_trait::async_trait;
use dnsrecon_application::ports::DnsResolver;
use dnsrecon_domain::config::QueryConfig;
use dnsrecon_domain::{DnsAnswer, DnsQuery, LookupError, Resolver, RetryResolver};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tracing::{debug, info_span, warn, Span};

/// Per-client query behaviour, taken from `[query]` in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientSettings {
    pub query_timeout: Duration,
    pub max_attempts: u32,
    pub burst: u32,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            query_timeout: Duration::from_secs(10),
            max_attempts: 3,
            burst: DEFAULT_BURST,
        }
    }
}

impl From<&QueryConfig> for ClientSettings {
    fn from(config: &QueryConfig) -> Self {
        Self {
            query_timeout: Duration::from_secs(config.query_timeout),
            max_attempts: config.max_attempts.max(1),
            burst: config.burst,
        }
    }
}

/// Queries one primary resolver, falling back to the retry pool on the last
/// attempt. Successful responses go to the shared cache.
pub struct DnsClient {
    resolver: Resolver,
    retry: Arc<RetryResolver>,
    limiter: RateLimiter,
    cursor: Mutex<usize>,
    cache: Arc<ResponseCache>,
    transport: Arc<dyn DnsTransport>,
    settings: ClientSettings,
    span: Span,
}

impl DnsClient {
    pub fn new(
        resolver: Resolver,
        retry: Arc<RetryResolver>,
        cache: Arc<ResponseCache>,
        transport: Arc<dyn DnsTransport>,
        settings: ClientSettings,
    ) -> Self {
        let span = info_span!("dns_client", resolver = %resolver.nameserver);
        Self {
            limiter: RateLimiter::new(resolver.ratelimit, settings.burst),
            resolver,
            retry,
            cursor: Mutex::new(0),
            cache,
            transport,
            settings,
            span,
        }
    }

    /// Round robin over the resolver's own endpoints, except on the final
    /// attempt which picks a random retry-pool endpoint.
    fn pick_server(&self, attempt: u32) -> Option<SocketAddr> {
        if attempt >= self.settings.max_attempts && !self.retry.ips.is_empty() {
            return Some(self.retry.ips[fastrand::usize(..self.retry.ips.len())]);
        }
        self.next_primary().or_else(|| {
            (!self.retry.ips.is_empty())
                .then(|| self.retry.ips[fastrand::usize(..self.retry.ips.len())])
        })
    }

    fn next_primary(&self) -> Option<SocketAddr> {
        if self.resolver.ips.is_empty() {
            return None;
        }
        let mut cursor = self.cursor.lock().unwrap_or_else(PoisonError::into_inner);
        let index = *cursor % self.resolver.ips.len();
        *cursor = (index + 1) % self.resolver.ips.len();
        Some(self.resolver.ips[index])
    }

    fn cached(&self, key: &str) -> Option<DnsAnswer> {
        let bytes = self.cache.get(key)?;
        match ResponseParser::parse(&bytes) {
            Ok(parsed) => Some(parsed.answer),
            Err(e) => {
                warn!(parent: &self.span, key = %key, error = %e, "Unreadable cached response");
                None
            }
        }
    }
}

#[async_trait]
impl DnsResolver for DnsClient {
    async fn resolve(&self, query: &DnsQuery) -> Result<DnsAnswer, LookupError> {
        let key = query.cache_key();
        if let Some(answer) = self.cached(&key) {
            debug!(parent: &self.span, key = %key, "Cache hit");
            return Ok(answer);
        }

        let (id, request) = MessageBuilder::build_query(query).map_err(|e| {
            warn!(parent: &self.span, key = %key, error = %e, "Cannot build query");
            LookupError::Failed
        })?;

        let mut last_error = LookupError::Failed;

        for attempt in 1..=self.settings.max_attempts {
            let throttled = self.limiter.acquire().await;
            if !throttled.is_zero() {
                debug!(
                    parent: &self.span,
                    key = %key,
                    waited_ms = throttled.as_millis() as u64,
                    "Rate limited"
                );
            }

            let Some(server) = self.pick_server(attempt) else {
                warn!(parent: &self.span, "Resolver has no endpoints");
                return Err(LookupError::Failed);
            };

            let response = match self
                .transport
                .send(server, &request, self.settings.query_timeout)
                .await
            {
                Ok(response) => response,
                Err(e) if e.is_retryable() => {
                    debug!(
                        parent: &self.span,
                        key = %key,
                        attempt,
                        server = %server,
                        error = %e,
                        "Query attempt failed"
                    );
                    last_error = match e {
                        TransportError::Timeout { .. } => LookupError::Timeout,
                        _ => LookupError::Failed,
                    };
                    continue;
                }
                Err(e) => {
                    warn!(parent: &self.span, key = %key, server = %server, error = %e, "Query failed");
                    return Err(LookupError::Failed);
                }
            };

            let parsed = match ResponseParser::parse(&response.bytes) {
                Ok(parsed) if parsed.id == id => parsed,
                Ok(parsed) => {
                    warn!(
                        parent: &self.span,
                        key = %key,
                        server = %server,
                        expected = id,
                        got = parsed.id,
                        "Response ID mismatch"
                    );
                    return Err(LookupError::Failed);
                }
                Err(e) => {
                    warn!(parent: &self.span, key = %key, server = %server, error = %e, "Malformed response");
                    return Err(LookupError::Failed);
                }
            };

            if let Some(error) = LookupError::from_rcode(parsed.rcode) {
                debug!(parent: &self.span, key = %key, server = %server, rcode = %error, "Negative response");
                return Err(error);
            }

            self.cache.put(key, response.bytes);
            return Ok(parsed.answer);
        }

        warn!(
            parent: &self.span,
            key = %key,
            attempts = self.settings.max_attempts,
            error = %last_error,
            "Query failed after all attempts"
        );
        Err(last_error)
    }
}
