//! # dnsrecon
//!
//! HTTP service that resolves every interesting record of a domain through a
//! pool of public resolvers.

mod bootstrap;
mod server;

use bootstrap::{build_clients, init_logging, load_config, load_resolvers};
use clap::Parser;
use dnsrecon_api::{create_api_routes, AppState};
use dnsrecon_application::services::ClientPool;
use dnsrecon_application::use_cases::{GetDnsDataUseCase, ReconDomainUseCase};
use dnsrecon_domain::{CliOverrides, Config, ResolverSet};
use dnsrecon_infrastructure::dns::{NetworkTransport, ResponseCache};
use dnsrecon_jobs::{CacheClearJob, JobRunner};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::info;

#[derive(Parser)]
#[command(name = "dnsrecon")]
#[command(version)]
#[command(about = "DNS reconnaissance over a pool of public resolvers")]
struct Cli {
    /// Service configuration file, created with defaults when missing
    #[arg(short = 'c', long, default_value = "config.toml")]
    config: PathBuf,

    /// Resolver list, created from the built-in list when missing
    #[arg(short = 'r', long, default_value = "resolvers.toml")]
    resolvers: PathBuf,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Web server port
    #[arg(short = 'w', long)]
    port: Option<u16>,

    /// Number of resolvers turned into pooled clients (0 = all enabled)
    #[arg(short = 'm', long)]
    max_dns_servers: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if ResolverSet::create_if_missing(&cli.resolvers)? {
        println!("Wrote built-in resolver list to {}", cli.resolvers.display());
    }
    if Config::create_if_missing(&cli.config)? {
        println!(
            "Wrote default configuration to {}, review it and start again",
            cli.config.display()
        );
        return Ok(());
    }

    let cli_overrides = CliOverrides {
        bind_address: cli.bind,
        web_port: cli.port,
        maximum_dns_servers: cli.max_dns_servers,
        log_level: cli.log_level,
    };
    let config = load_config(&cli.config, cli_overrides)?;
    init_logging(&config);
    let resolvers = load_resolvers(&cli.resolvers)?;

    info!("Starting dnsrecon v{}", env!("CARGO_PKG_VERSION"));

    let cache = Arc::new(ResponseCache::new(config.query.cache_capacity));
    let clients = build_clients(
        &config,
        &resolvers,
        Arc::clone(&cache),
        Arc::new(NetworkTransport),
    );
    let pool = Arc::new(ClientPool::new(clients));
    info!(clients = pool.size(), "Client pool ready");

    let engine = GetDnsDataUseCase::new()
        .with_retry_delay(Duration::from_millis(config.query.sublookup_retry_delay));
    let recon = ReconDomainUseCase::new(Arc::clone(&pool), engine).with_timeouts(
        Duration::from_secs(config.pool.checkout_timeout),
        Duration::from_secs(config.pool.retry_checkout_timeout),
    );

    let shutdown = CancellationToken::new();

    let jobs = JobRunner::new()
        .with_cache_clear(
            CacheClearJob::new(cache)
                .with_interval(config.query.cache_clear_interval)
                .with_cancellation(shutdown.child_token()),
        )
        .start();

    let state = AppState {
        recon: Arc::new(recon),
    };
    let app = create_api_routes(state, Duration::from_secs(config.server.request_timeout));

    let bind_addr: SocketAddr =
        format!("{}:{}", config.server.bind_address, config.server.web_port).parse()?;

    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutdown signal received");
        }
        signal_token.cancel();
    });

    server::start_web_server(bind_addr, app, shutdown.clone()).await?;

    shutdown.cancel();
    pool.close();
    jobs.join().await;
    info!("dnsrecon stopped");

    Ok(())
}
