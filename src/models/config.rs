//! Configuration model loaded from external sources.

use std::time::Duration;

use config::{Config, ConfigError};
use serde::Deserialize;

fn default_refresh_interval_secs() -> u64 {
    300
}

fn default_request_timeout_secs() -> u64 {
    30
}

#[derive(Clone, Debug, Deserialize)]
/// Settings shared by the server and the report binary.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// CSV export URL of the sales sheet.
    pub sheet_url: String,
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Base URL of the project hosting the settings function.
    pub settings_url: String,
    pub settings_api_key: String,
}

impl ServerConfig {
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Reads `config/default`, the optional `config/{app_env}` overlay and
/// `APP_*` environment variables, in increasing priority.
pub fn load_server_config(app_env: &str) -> Result<ServerConfig, ConfigError> {
    Config::builder()
        .add_source(config::File::with_name("config/default"))
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        .add_source(config::Environment::with_prefix("APP"))
        .build()?
        .try_deserialize::<ServerConfig>()
}
