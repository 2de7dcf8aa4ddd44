use dnsrecon_domain::{DomainData, LookupError, RecordType};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// The `DomainData` under construction, shared by every lookup task of one
/// resolution. The lock belongs to the instance, never to a DNS client.
#[derive(Clone)]
pub struct SharedDomainData {
    inner: Arc<Mutex<DomainData>>,
}

impl SharedDomainData {
    pub fn new(data: DomainData) -> Self {
        Self {
            inner: Arc::new(Mutex::new(data)),
        }
    }

    pub fn push_cname_path(&self, record_type: RecordType, path: Vec<String>) {
        self.lock().push_cname_path(record_type, path);
    }

    pub fn record_error(&self, record_type: RecordType, error: LookupError) {
        self.lock().record_error(record_type, error);
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut DomainData) -> R) -> R {
        f(&mut self.lock())
    }

    /// Takes the finished result out; only called once every task was joined.
    pub fn take(&self) -> DomainData {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, DomainData> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
