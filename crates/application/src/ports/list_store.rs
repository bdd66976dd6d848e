use async_trait::async_trait;
use bytes::Bytes;
use listkeeper_domain::{DomainError, ListKind};
use tokio::io::AsyncRead;

/// Raw byte stream over a list's backing file.
pub type ListReader = Box<dyn AsyncRead + Send + Unpin>;

/// Persistence for the named lists. The backing file is the only copy of a
/// list; every call goes to storage.
#[async_trait]
pub trait ListStore: Send + Sync {
    /// All entries, sorted ascending. A missing backing file is an error.
    async fn read(&self, kind: ListKind) -> Result<Vec<String>, DomainError>;

    /// Replaces the list with `entries`, one per line, in the given order.
    async fn write(&self, kind: ListKind, entries: &[String]) -> Result<(), DomainError>;

    async fn open_raw(&self, kind: ListKind) -> Result<ListReader, DomainError>;

    /// Overwrites the backing file with `contents` as-is.
    async fn replace_raw(&self, kind: ListKind, contents: Bytes) -> Result<(), DomainError>;
}
