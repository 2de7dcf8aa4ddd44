use std::collections::VecDeque;
use std::ops::Deref;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::{Semaphore, SemaphorePermit};
use tracing::{debug, warn};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolError {
    #[error("no client became available within {0:?}")]
    Timeout(Duration),

    #[error("client pool is closed")]
    Closed,
}

/// Fixed-size pool of clients handed out for exclusive use.
///
/// The number of clients in circulation (idle plus checked out) never changes
/// after construction: every successful [`ClientPool::checkout`] yields a
/// [`PooledClient`] guard that puts the client back when dropped, whatever
/// path the borrower leaves through.
pub struct ClientPool<C> {
    idle: Mutex<VecDeque<C>>,
    available: Semaphore,
    size: usize,
}

impl<C> ClientPool<C> {
    pub fn new(clients: Vec<C>) -> Self {
        let size = clients.len();
        Self {
            idle: Mutex::new(clients.into()),
            available: Semaphore::new(size),
            size,
        }
    }

    /// Waits up to `wait` for a free client.
    pub async fn checkout(&self, wait: Duration) -> Result<PooledClient<'_, C>, PoolError> {
        let permit = match tokio::time::timeout(wait, self.available.acquire()).await {
            Ok(Ok(permit)) => permit,
            Ok(Err(_)) => return Err(PoolError::Closed),
            Err(_) => {
                warn!(timeout_ms = wait.as_millis() as u64, "Client checkout timed out");
                return Err(PoolError::Timeout(wait));
            }
        };

        // A permit is only ever released after its client went back to `idle`.
        let client = self.lock_idle().pop_front().ok_or(PoolError::Closed)?;
        debug!(idle = self.idle_count(), "Client checked out");

        Ok(PooledClient {
            pool: self,
            client: Some(client),
            _permit: permit,
        })
    }

    /// Fails pending and future checkouts; clients already out still come back.
    pub fn close(&self) {
        self.available.close();
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn idle_count(&self) -> usize {
        self.lock_idle().len()
    }

    fn give_back(&self, client: C) {
        self.lock_idle().push_back(client);
    }

    fn lock_idle(&self) -> MutexGuard<'_, VecDeque<C>> {
        self.idle.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Exclusive borrow of one pooled client.
pub struct PooledClient<'a, C> {
    pool: &'a ClientPool<C>,
    client: Option<C>,
    // Dropped after `Drop::drop` has returned the client.
    _permit: SemaphorePermit<'a>,
}

impl<C> Deref for PooledClient<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.client
            .as_ref()
            .expect("pooled client is present until drop")
    }
}

impl<C> Drop for PooledClient<'_, C> {
    fn drop(&mut self) {
        if let Some(client) = self.client.take() {
            self.pool.give_back(client);
        }
    }
}
