use listkeeper_application::ports::ListStore;
use listkeeper_application::services::ListLock;
use listkeeper_application::use_cases::{
    AddDomainUseCase, DownloadListUseCase, GetAllListsUseCase, GetPaginatedListUseCase,
    RemoveDomainUseCase, UploadListUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub lists: ListUseCases,
}

#[derive(Clone)]
pub struct ListUseCases {
    pub get_all: Arc<GetAllListsUseCase>,
    pub get_paginated: Arc<GetPaginatedListUseCase>,
    pub add_domain: Arc<AddDomainUseCase>,
    pub remove_domain: Arc<RemoveDomainUseCase>,
    pub download: Arc<DownloadListUseCase>,
    pub upload: Arc<UploadListUseCase>,
}

impl ListUseCases {
    /// Wires every list use case to one store. The four lock-guarded use
    /// cases share `lock`; download and upload do not take it.
    pub fn new(store: Arc<dyn ListStore>, lock: ListLock) -> Self {
        Self {
            get_all: Arc::new(GetAllListsUseCase::new(store.clone(), lock.clone())),
            get_paginated: Arc::new(GetPaginatedListUseCase::new(store.clone(), lock.clone())),
            add_domain: Arc::new(AddDomainUseCase::new(store.clone(), lock.clone())),
            remove_domain: Arc::new(RemoveDomainUseCase::new(store.clone(), lock)),
            download: Arc::new(DownloadListUseCase::new(store.clone())),
            upload: Arc::new(UploadListUseCase::new(store)),
        }
    }
}
