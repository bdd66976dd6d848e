mod list_lock;

pub use list_lock::ListLock;
