use bytes::Bytes;
use listkeeper_domain::{DomainError, ListKind};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::ListStore;

/// Replaces a list's backing file with uploaded bytes, verbatim.
///
/// No parsing, sorting or deduplication happens here, and the write is not
/// serialized with [`ListLock`](crate::services::ListLock).
pub struct UploadListUseCase {
    store: Arc<dyn ListStore>,
}

impl UploadListUseCase {
    pub fn new(store: Arc<dyn ListStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self, contents), fields(bytes = contents.len()))]
    pub async fn execute(&self, list: &str, contents: Bytes) -> Result<(), DomainError> {
        let kind: ListKind = list.parse()?;
        let size = contents.len();
        self.store.replace_raw(kind, contents).await?;
        info!(list = %kind, bytes = size, "List replaced from upload");
        Ok(())
    }
}
