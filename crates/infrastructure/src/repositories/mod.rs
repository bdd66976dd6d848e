pub mod file_list_repository;

pub use file_list_repository::FileListRepository;
