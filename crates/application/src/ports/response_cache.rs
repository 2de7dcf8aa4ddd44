/// Maintenance handle on the shared response cache, used by background jobs.
pub trait ResponseCacheControl: Send + Sync {
    fn clear(&self);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
