pub mod lists;

pub use lists::{
    AddDomainUseCase, AllLists, DownloadListUseCase, GetAllListsUseCase,
    GetPaginatedListUseCase, RemoveDomainUseCase, UploadListUseCase,
};
