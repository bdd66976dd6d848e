use listkeeper_domain::Config;
use listkeeper_infrastructure::repositories::FileListRepository;
use std::sync::Arc;
use tracing::{info, warn};

pub struct Repositories {
    pub lists: Arc<FileListRepository>,
}

impl Repositories {
    pub fn new(config: &Config) -> Self {
        info!(
            blocklist = %config.lists.blocklist_path,
            allowlist = %config.lists.allowlist_path,
            "Using list files"
        );
        Self {
            lists: Arc::new(FileListRepository::new(&config.lists)),
        }
    }

    /// Missing files are not fatal at startup; reads of that list fail until
    /// it is provisioned or uploaded.
    pub async fn report_missing_lists(&self) {
        for kind in self.lists.missing_files().await {
            warn!(
                list = %kind,
                path = %self.lists.path_for(kind).display(),
                "List file does not exist yet"
            );
        }
    }
}
