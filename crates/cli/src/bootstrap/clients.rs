use dnsrecon_application::use_cases::SharedResolver;
use dnsrecon_domain::{Config, ResolverSet};
use dnsrecon_infrastructure::dns::{ClientSettings, DnsClient, DnsTransport, ResponseCache};
use std::sync::Arc;
use tracing::{info, warn};

/// One pooled client per enabled resolver, capped at `maximum_dns_servers`
/// (0 takes them all). Every client shares the cache and the retry pool.
pub fn build_clients(
    config: &Config,
    resolvers: &ResolverSet,
    cache: Arc<ResponseCache>,
    transport: Arc<dyn DnsTransport>,
) -> Vec<SharedResolver> {
    let settings = ClientSettings::from(&config.query);
    let retry = Arc::new(resolvers.retry_servers.clone());
    let limit = match config.maximum_dns_servers {
        0 => usize::MAX,
        n => n,
    };

    let clients: Vec<SharedResolver> = resolvers
        .enabled()
        .take(limit)
        .map(|resolver| {
            info!(
                resolver = %resolver.nameserver,
                endpoints = resolver.ips.len(),
                ratelimit = resolver.ratelimit,
                "DNS client ready"
            );
            Arc::new(DnsClient::new(
                resolver.clone(),
                Arc::clone(&retry),
                Arc::clone(&cache),
                Arc::clone(&transport),
                settings,
            )) as SharedResolver
        })
        .collect();

    if clients.is_empty() {
        warn!("No DNS clients configured, every request will be rejected");
    }

    clients
}
