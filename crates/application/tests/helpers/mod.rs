#![allow(dead_code)]

mod mock_list_store;

pub use mock_list_store::MockListStore;
