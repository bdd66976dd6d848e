use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::DomainError;

/// The two named lists the service manages.
///
/// Parsing is exact and case-sensitive: only `blocklist` and `allowlist`
/// resolve, anything else is rejected with [`DomainError::InvalidListType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Blocklist,
    Allowlist,
}

impl ListKind {
    pub const ALL: [ListKind; 2] = [ListKind::Blocklist, ListKind::Allowlist];

    pub fn as_str(&self) -> &'static str {
        match self {
            ListKind::Blocklist => "blocklist",
            ListKind::Allowlist => "allowlist",
        }
    }

    /// File name offered to clients when the list is downloaded.
    pub fn download_file_name(&self) -> String {
        format!("{}.txt", self.as_str())
    }
}

impl FromStr for ListKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blocklist" => Ok(ListKind::Blocklist),
            "allowlist" => Ok(ListKind::Allowlist),
            other => Err(DomainError::InvalidListType(other.to_string())),
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
