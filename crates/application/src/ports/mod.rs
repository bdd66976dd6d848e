mod list_store;

pub use list_store::{ListReader, ListStore};
