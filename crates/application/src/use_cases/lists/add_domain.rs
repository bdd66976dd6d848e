use listkeeper_domain::{DomainError, ListKind};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::ListStore;
use crate::services::ListLock;

/// Appends an entry to a list. Duplicates and arbitrary strings are accepted.
pub struct AddDomainUseCase {
    store: Arc<dyn ListStore>,
    lock: ListLock,
}

impl AddDomainUseCase {
    pub fn new(store: Arc<dyn ListStore>, lock: ListLock) -> Self {
        Self { store, lock }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, list: &str, domain: &str) -> Result<(), DomainError> {
        let _guard = self.lock.acquire().await;

        let kind: ListKind = list.parse()?;
        let mut entries = self.store.read(kind).await?;
        entries.push(domain.to_string());
        entries.sort();
        self.store.write(kind, &entries).await?;

        info!(list = %kind, domain = %domain, size = entries.len(), "Domain added");
        Ok(())
    }
}
