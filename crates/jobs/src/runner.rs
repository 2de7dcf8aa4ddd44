use crate::CacheClearJob;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Registers background jobs and spawns them together.
///
/// ```rust,ignore
/// let jobs = JobRunner::new()
///     .with_cache_clear(CacheClearJob::new(cache).with_cancellation(token.clone()))
///     .start();
/// token.cancel();
/// jobs.join().await;
/// ```
#[derive(Default)]
pub struct JobRunner {
    cache_clear: Option<CacheClearJob>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cache_clear(mut self, job: CacheClearJob) -> Self {
        self.cache_clear = Some(job);
        self
    }

    pub fn start(self) -> RunningJobs {
        let mut handles = Vec::new();
        if let Some(job) = self.cache_clear {
            handles.push(("cache_clear", Arc::new(job).start()));
        }

        info!(jobs = handles.len(), "Background jobs started");
        RunningJobs { handles }
    }
}

/// Handles of spawned jobs. Jobs stop through their cancellation token.
pub struct RunningJobs {
    handles: Vec<(&'static str, JoinHandle<()>)>,
}

impl RunningJobs {
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Waits for every job to finish.
    pub async fn join(self) {
        for (name, handle) in self.handles {
            if let Err(e) = handle.await {
                warn!(job = name, error = %e, "Background job ended abnormally");
            }
        }
    }
}
