use listkeeper_domain::{DomainError, ListKind};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::{ListReader, ListStore};

/// Opens the raw backing file of a list for streaming.
///
/// Not serialized with [`ListLock`](crate::services::ListLock): a concurrent
/// mutation may be observed half-written.
pub struct DownloadListUseCase {
    store: Arc<dyn ListStore>,
}

impl DownloadListUseCase {
    pub fn new(store: Arc<dyn ListStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, list: &str) -> Result<(ListKind, ListReader), DomainError> {
        let kind: ListKind = list.parse()?;
        let reader = self.store.open_raw(kind).await?;
        debug!(list = %kind, "List opened for download");
        Ok((kind, reader))
    }
}
