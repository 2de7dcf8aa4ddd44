use dnsrecon_application::ports::ResponseCacheControl;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Empties the shared response cache on a fixed interval (24h by default).
/// The first clear happens one full interval after start.
pub struct CacheClearJob {
    cache: Arc<dyn ResponseCacheControl>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl CacheClearJob {
    pub fn new(cache: Arc<dyn ResponseCacheControl>) -> Self {
        Self {
            cache,
            interval_secs: 86400,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs.max(1);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    /// Spawns the clear loop; the handle resolves once the job is cancelled.
    pub fn start(self: Arc<Self>) -> JoinHandle<()> {
        info!(
            interval_secs = self.interval_secs,
            "Starting response cache clear job"
        );

        tokio::spawn(async move {
            let period = Duration::from_secs(self.interval_secs);
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("CacheClearJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        let entries = self.cache.len();
                        self.cache.clear();
                        info!(entries, "Response cache cleared");
                    }
                }
            }
        })
    }
}
