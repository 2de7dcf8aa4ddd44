#![allow(dead_code)]

use dnsrecon_application::ports::ResponseCacheControl;
use std::sync::atomic::{AtomicUsize, Ordering};

// ============================================================================
// Mock ResponseCacheControl
// ============================================================================

/// Pretends to hold `entries` items and counts how often it was cleared.
pub struct MockResponseCache {
    entries: AtomicUsize,
    clears: AtomicUsize,
}

impl MockResponseCache {
    pub fn with_entries(entries: usize) -> Self {
        Self {
            entries: AtomicUsize::new(entries),
            clears: AtomicUsize::new(0),
        }
    }

    pub fn fill(&self, entries: usize) {
        self.entries.store(entries, Ordering::SeqCst);
    }

    pub fn clears(&self) -> usize {
        self.clears.load(Ordering::SeqCst)
    }
}

impl ResponseCacheControl for MockResponseCache {
    fn clear(&self) {
        self.entries.store(0, Ordering::SeqCst);
        self.clears.fetch_add(1, Ordering::SeqCst);
    }

    fn len(&self) -> usize {
        self.entries.load(Ordering::SeqCst)
    }
}
