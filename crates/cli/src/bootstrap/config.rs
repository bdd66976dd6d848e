use listkeeper_domain::config::WebConfig;
use listkeeper_domain::{CliOverrides, Config};
use std::path::Path;

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    Ok(Config::load(path, overrides)?)
}

/// The frontend directory must exist before the server starts.
pub fn check_static_dir(web: &WebConfig) -> anyhow::Result<()> {
    if !Path::new(&web.static_dir).is_dir() {
        anyhow::bail!("static directory '{}' does not exist", web.static_dir);
    }
    Ok(())
}
