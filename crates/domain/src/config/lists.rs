use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::ListKind;

/// Backing files of the two lists. Fixed for the lifetime of the process.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListsConfig {
    pub blocklist_path: String,

    pub allowlist_path: String,
}

impl ListsConfig {
    pub fn path_for(&self, kind: ListKind) -> &Path {
        match kind {
            ListKind::Blocklist => Path::new(&self.blocklist_path),
            ListKind::Allowlist => Path::new(&self.allowlist_path),
        }
    }
}

impl Default for ListsConfig {
    fn default() -> Self {
        Self {
            blocklist_path: "data/blocklist.txt".to_string(),
            allowlist_path: "data/allowlist.txt".to_string(),
        }
    }
}
