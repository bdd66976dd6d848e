mod config;
mod logging;

pub use config::{check_static_dir, load_config};
pub use logging::init_logging;
