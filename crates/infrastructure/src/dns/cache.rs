use bytes::Bytes;
use dnsrecon_application::ports::ResponseCacheControl;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{PoisonError, RwLock, RwLockWriteGuard};
use tracing::debug;

pub const DEFAULT_CAPACITY: usize = 10_000;

/// Raw responses keyed by `name:TYPE`, shared by every DNS client.
///
/// Capacity-bounded only: entries never expire on their own and stay until
/// evicted or until [`ResponseCache::clear`] runs. A `get` promotes the entry,
/// so every operation takes the write side of the lock.
pub struct ResponseCache {
    entries: RwLock<LruCache<String, Bytes>>,
}

impl ResponseCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: RwLock::new(LruCache::new(capacity)),
        }
    }

    pub fn get(&self, key: &str) -> Option<Bytes> {
        self.write().get(key).cloned()
    }

    pub fn put(&self, key: String, response: Bytes) {
        self.write().put(key, response);
    }

    pub fn capacity(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .cap()
            .get()
    }

    fn write(&self) -> RwLockWriteGuard<'_, LruCache<String, Bytes>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl ResponseCacheControl for ResponseCache {
    fn clear(&self) {
        let mut entries = self.write();
        let dropped = entries.len();
        entries.clear();
        debug!(dropped, "Response cache cleared");
    }

    fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
