mod add_domain;
mod download_list;
mod get_all_lists;
mod get_paginated_list;
mod remove_domain;
mod upload_list;

pub use add_domain::AddDomainUseCase;
pub use download_list::DownloadListUseCase;
pub use get_all_lists::{AllLists, GetAllListsUseCase};
pub use get_paginated_list::GetPaginatedListUseCase;
pub use remove_domain::RemoveDomainUseCase;
pub use upload_list::UploadListUseCase;
