pub mod lists;
pub mod transfer;

pub use lists::{add_domain, get_lists, get_paginated_list, remove_domain};
pub use transfer::{download_list, upload_list};
