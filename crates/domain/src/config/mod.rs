//! Configuration module for dnsrecon
//!
//! - `root`: main configuration, first-run bootstrap and CLI overrides
//! - `server`: HTTP binding
//! - `pool`: client checkout timeouts
//! - `query`: per-query timeouts, retries, rate limiting and cache sizing
//! - `logging`: logging settings
//! - `resolvers`: the resolver list file
//! - `errors`: configuration errors

pub mod errors;
pub mod logging;
pub mod pool;
pub mod query;
pub mod resolvers;
pub mod root;
pub mod server;

pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use pool::PoolConfig;
pub use query::QueryConfig;
pub use resolvers::{Resolver, ResolverSet, RetryResolver};
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
