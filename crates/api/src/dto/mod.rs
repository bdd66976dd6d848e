pub mod lists;

pub use lists::{
    DomainRequest, ListQuery, ListsResponse, PaginatedListQuery, PaginatedListResponse,
};
