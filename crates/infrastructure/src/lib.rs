pub mod repositories;
pub mod storage;
