use listkeeper_domain::{DomainError, ListKind};
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::ports::ListStore;
use crate::services::ListLock;

pub struct RemoveDomainUseCase {
    store: Arc<dyn ListStore>,
    lock: ListLock,
}

impl RemoveDomainUseCase {
    pub fn new(store: Arc<dyn ListStore>, lock: ListLock) -> Self {
        Self { store, lock }
    }

    /// Removes the first entry equal to `domain` and returns whether one was
    /// found. The list is rewritten either way.
    #[instrument(skip(self))]
    pub async fn execute(&self, list: &str, domain: &str) -> Result<bool, DomainError> {
        let _guard = self.lock.acquire().await;

        let kind: ListKind = list.parse()?;
        let mut entries = self.store.read(kind).await?;

        let removed = match entries.iter().position(|entry| entry == domain) {
            Some(index) => {
                entries.remove(index);
                true
            }
            None => false,
        };

        entries.sort();
        self.store.write(kind, &entries).await?;

        if removed {
            info!(list = %kind, domain = %domain, size = entries.len(), "Domain removed");
        } else {
            debug!(list = %kind, domain = %domain, "Domain not present, nothing removed");
        }

        Ok(removed)
    }
}
