use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

/// Process-wide exclusion for list read-modify-write cycles.
///
/// Cloning shares the same underlying mutex. Every guarded use case must be
/// built from clones of one `ListLock` for the exclusion to hold.
#[derive(Clone, Default)]
pub struct ListLock {
    inner: Arc<Mutex<()>>,
}

impl ListLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self) -> MutexGuard<'_, ()> {
        self.inner.lock().await
    }

    pub fn try_acquire(&self) -> Option<MutexGuard<'_, ()>> {
        self.inner.try_lock().ok()
    }
}
