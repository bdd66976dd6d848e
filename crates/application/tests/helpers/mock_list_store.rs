use async_trait::async_trait;
use bytes::Bytes;
use listkeeper_application::ports::{ListReader, ListStore};
use listkeeper_domain::{DomainError, ListKind};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// Keeps each list as the raw bytes a backing file would hold, so reads and
/// writes go through the same line handling as the real store.
#[derive(Clone, Default)]
pub struct MockListStore {
    files: Arc<RwLock<HashMap<ListKind, Vec<u8>>>>,
    should_fail: Arc<AtomicBool>,
    read_delay: Option<Duration>,
    writes: Arc<AtomicUsize>,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
}

impl MockListStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_lists(blocklist: Vec<&str>, allowlist: Vec<&str>) -> Self {
        let store = Self::new();
        store.set_raw(ListKind::Blocklist, &join(&blocklist)).await;
        store.set_raw(ListKind::Allowlist, &join(&allowlist)).await;
        store
    }

    /// Every read sleeps for `delay` while counted as in flight.
    pub fn with_read_delay(mut self, delay: Duration) -> Self {
        self.read_delay = Some(delay);
        self
    }

    pub async fn set_raw(&self, kind: ListKind, contents: &str) {
        self.files
            .write()
            .await
            .insert(kind, contents.as_bytes().to_vec());
    }

    pub async fn raw(&self, kind: ListKind) -> Option<String> {
        self.files
            .read()
            .await
            .get(&kind)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    /// Lines exactly as stored, without the sort a read applies.
    pub async fn stored_lines(&self, kind: ListKind) -> Vec<String> {
        self.raw(kind)
            .await
            .map(|raw| raw.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    fn check_failure(&self) -> Result<(), DomainError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::IoError("simulated failure".to_string()));
        }
        Ok(())
    }
}

fn join(lines: &[&str]) -> String {
    lines.iter().map(|line| format!("{}\n", line)).collect()
}

#[async_trait]
impl ListStore for MockListStore {
    async fn read(&self, kind: ListKind) -> Result<Vec<String>, DomainError> {
        self.check_failure()?;

        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);
        if let Some(delay) = self.read_delay {
            tokio::time::sleep(delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        let raw = self
            .raw(kind)
            .await
            .ok_or_else(|| DomainError::IoError(format!("{}: no such file", kind)))?;
        let mut lines: Vec<String> = raw.lines().map(str::to_string).collect();
        lines.sort();
        Ok(lines)
    }

    async fn write(&self, kind: ListKind, entries: &[String]) -> Result<(), DomainError> {
        self.check_failure()?;
        let contents: String = entries.iter().map(|e| format!("{}\n", e)).collect();
        self.set_raw(kind, &contents).await;
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn open_raw(&self, kind: ListKind) -> Result<ListReader, DomainError> {
        self.check_failure()?;
        let bytes = self
            .files
            .read()
            .await
            .get(&kind)
            .cloned()
            .ok_or_else(|| DomainError::ListFileNotFound(kind.to_string()))?;
        Ok(Box::new(std::io::Cursor::new(bytes)))
    }

    async fn replace_raw(&self, kind: ListKind, contents: Bytes) -> Result<(), DomainError> {
        self.check_failure()?;
        self.files.write().await.insert(kind, contents.to_vec());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
