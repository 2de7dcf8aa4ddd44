use serde::{Deserialize, Serialize};

/// Client pool checkout settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PoolConfig {
    /// Seconds a request waits for a free DNS client (default: 40)
    #[serde(default = "default_checkout_timeout")]
    pub checkout_timeout: u64,

    /// Seconds to wait for a second client when the first one could not
    /// resolve anything (default: 5)
    #[serde(default = "default_retry_checkout_timeout")]
    pub retry_checkout_timeout: u64,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            checkout_timeout: default_checkout_timeout(),
            retry_checkout_timeout: default_retry_checkout_timeout(),
        }
    }
}

fn default_checkout_timeout() -> u64 {
    40
}

fn default_retry_checkout_timeout() -> u64 {
    5
}
