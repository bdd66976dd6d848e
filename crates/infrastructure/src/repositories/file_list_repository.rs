use async_trait::async_trait;
use bytes::Bytes;
use listkeeper_application::ports::{ListReader, ListStore};
use listkeeper_domain::{DomainError, ListKind, ListsConfig};
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs::{self, File};
use tracing::{debug, warn};

use crate::storage::{read_lines, write_lines};

/// [`ListStore`] backed by one text file per list.
pub struct FileListRepository {
    config: ListsConfig,
}

impl FileListRepository {
    pub fn new(config: &ListsConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    pub fn path_for(&self, kind: ListKind) -> &Path {
        self.config.path_for(kind)
    }

    /// Lists whose backing file does not exist yet.
    pub async fn missing_files(&self) -> Vec<ListKind> {
        let mut missing = Vec::new();
        for kind in ListKind::ALL {
            if !fs::try_exists(self.path_for(kind)).await.unwrap_or(false) {
                missing.push(kind);
            }
        }
        missing
    }
}

#[async_trait]
impl ListStore for FileListRepository {
    async fn read(&self, kind: ListKind) -> Result<Vec<String>, DomainError> {
        read_lines(self.path_for(kind)).await.inspect_err(|e| {
            warn!(list = %kind, error = %e, "Failed to read list");
        })
    }

    async fn write(&self, kind: ListKind, entries: &[String]) -> Result<(), DomainError> {
        write_lines(self.path_for(kind), entries)
            .await
            .inspect_err(|e| {
                warn!(list = %kind, error = %e, "Failed to write list");
            })
    }

    async fn open_raw(&self, kind: ListKind) -> Result<ListReader, DomainError> {
        let path = self.path_for(kind);
        match File::open(path).await {
            Ok(file) => Ok(Box::new(file)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(DomainError::ListFileNotFound(path.display().to_string()))
            }
            Err(e) => Err(DomainError::io(path.display(), e)),
        }
    }

    async fn replace_raw(&self, kind: ListKind, contents: Bytes) -> Result<(), DomainError> {
        let path = self.path_for(kind);
        fs::write(path, &contents)
            .await
            .map_err(|e| DomainError::io(path.display(), e))?;
        debug!(list = %kind, bytes = contents.len(), "List file replaced");
        Ok(())
    }
}
