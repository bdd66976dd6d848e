//! Listkeeper Domain Layer
pub mod config;
pub mod errors;
pub mod list_kind;
pub mod list_page;

pub use config::{CliOverrides, Config, ConfigError, ListsConfig};
pub use errors::DomainError;
pub use list_kind::ListKind;
pub use list_page::{filter_entries, ListPage, PageNumber, PAGE_SIZE};
