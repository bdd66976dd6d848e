use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub web_port: u16,

    pub bind_address: String,

    /// Upper bound on request bodies, which caps list uploads.
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            web_port: 8080,
            bind_address: "0.0.0.0".to_string(),
            max_upload_bytes: 32 * 1024 * 1024,
        }
    }
}
