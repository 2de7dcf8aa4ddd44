use serde::{Deserialize, Serialize};

/// Per-query behaviour of every DNS client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryConfig {
    /// Seconds allowed for one exchange with a resolver (default: 10)
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,

    /// Attempts per query; the last one goes to the retry pool (default: 3)
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Token bucket burst for each resolver's rate limiter (default: 5)
    #[serde(default = "default_burst")]
    pub burst: u32,

    /// Entries kept by the shared response cache (default: 10000)
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,

    /// Seconds between unconditional cache clears (default: 86400)
    #[serde(default = "default_cache_clear_interval")]
    pub cache_clear_interval: u64,

    /// Milliseconds before retrying a failed SOA or nameserver address lookup (default: 500)
    #[serde(default = "default_sublookup_retry_delay")]
    pub sublookup_retry_delay: u64,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            query_timeout: default_query_timeout(),
            max_attempts: default_max_attempts(),
            burst: default_burst(),
            cache_capacity: default_cache_capacity(),
            cache_clear_interval: default_cache_clear_interval(),
            sublookup_retry_delay: default_sublookup_retry_delay(),
        }
    }
}

fn default_query_timeout() -> u64 {
    10
}

fn default_max_attempts() -> u32 {
    3
}

fn default_burst() -> u32 {
    5
}

fn default_cache_capacity() -> usize {
    10_000
}

fn default_cache_clear_interval() -> u64 {
    86_400
}

fn default_sublookup_retry_delay() -> u64 {
    500
}
