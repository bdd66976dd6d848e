use listkeeper_domain::{DomainError, ListKind};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::ListStore;
use crate::services::ListLock;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllLists {
    pub blocklist: Vec<String>,
    pub allowlist: Vec<String>,
}

pub struct GetAllListsUseCase {
    store: Arc<dyn ListStore>,
    lock: ListLock,
}

impl GetAllListsUseCase {
    pub fn new(store: Arc<dyn ListStore>, lock: ListLock) -> Self {
        Self { store, lock }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<AllLists, DomainError> {
        let _guard = self.lock.acquire().await;

        let mut blocklist = self.store.read(ListKind::Blocklist).await?;
        let mut allowlist = self.store.read(ListKind::Allowlist).await?;
        blocklist.sort();
        allowlist.sort();

        debug!(
            blocklist = blocklist.len(),
            allowlist = allowlist.len(),
            "Lists loaded"
        );

        Ok(AllLists {
            blocklist,
            allowlist,
        })
    }
}
