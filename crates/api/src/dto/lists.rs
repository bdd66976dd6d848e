use listkeeper_application::use_cases::AllLists;
use listkeeper_domain::ListPage;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug)]
pub struct ListsResponse {
    pub blocklist: Vec<String>,
    pub allowlist: Vec<String>,
}

impl From<AllLists> for ListsResponse {
    fn from(lists: AllLists) -> Self {
        Self {
            blocklist: lists.blocklist,
            allowlist: lists.allowlist,
        }
    }
}

/// Query parameters are kept as raw strings; page parsing is lenient.
#[derive(Deserialize, Debug, Default)]
pub struct PaginatedListQuery {
    pub list: Option<String>,
    pub page: Option<String>,
    pub search: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct PaginatedListResponse {
    pub list: Vec<String>,
    #[serde(rename = "totalCount")]
    pub total_count: usize,
}

impl From<ListPage> for PaginatedListResponse {
    fn from(page: ListPage) -> Self {
        Self {
            list: page.entries,
            total_count: page.total_count,
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct DomainRequest {
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub list: String,
}

#[derive(Deserialize, Debug, Default)]
pub struct ListQuery {
    pub list: Option<String>,
}
