use listkeeper_domain::{filter_entries, DomainError, ListKind, ListPage, PageNumber};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::ListStore;
use crate::services::ListLock;

pub struct GetPaginatedListUseCase {
    store: Arc<dyn ListStore>,
    lock: ListLock,
}

impl GetPaginatedListUseCase {
    pub fn new(store: Arc<dyn ListStore>, lock: ListLock) -> Self {
        Self { store, lock }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        list: &str,
        page: PageNumber,
        search: &str,
    ) -> Result<ListPage, DomainError> {
        let _guard = self.lock.acquire().await;

        let kind: ListKind = list.parse()?;
        let entries = self.store.read(kind).await?;
        let filtered = filter_entries(entries, search);
        let result = ListPage::from_entries(filtered, page);

        debug!(
            list = %kind,
            page = page.get(),
            returned = result.entries.len(),
            total = result.total_count,
            "List page retrieved"
        );

        Ok(result)
    }
}
