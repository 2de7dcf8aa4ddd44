use dnsrecon_domain::{CliOverrides, Config, ResolverSet};
use std::path::Path;
use tracing::info;

pub fn load_config(config_path: &Path, cli_overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;

    info!(
        config_file = %config_path.display(),
        web_port = config.server.web_port,
        bind = %config.server.bind_address,
        maximum_dns_servers = config.maximum_dns_servers,
        "Configuration loaded"
    );

    Ok(config)
}

pub fn load_resolvers(resolvers_path: &Path) -> anyhow::Result<ResolverSet> {
    let resolvers = ResolverSet::load(resolvers_path)?;

    info!(
        resolvers_file = %resolvers_path.display(),
        enabled = resolvers.enabled().count(),
        retry_endpoints = resolvers.retry_servers.ips.len(),
        "Resolver list loaded"
    );

    Ok(resolvers)
}
