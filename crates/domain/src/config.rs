pub mod errors;
pub mod lists;
pub mod logging;
pub mod root;
pub mod server;
pub mod web;

pub use errors::ConfigError;
pub use lists::ListsConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use web::WebConfig;
