use crate::domain::modem_info::Markers;
use serde::Deserialize;
use std::time::Duration;

/// Optional; every setting has a default
pub const CONFIG_PATH: &str = "/etc/modem-info/modem-info";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub command: CommandConfig,
    #[serde(default)]
    pub markers: Markers,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CommandConfig {
    #[serde(default = "default_program")]
    pub program: String,
    #[serde(default = "default_args")]
    pub args: Vec<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_program() -> String {
    "/usr/libexec/rpcd/modem_ctrl".to_string()
}

fn default_args() -> Vec<String> {
    vec!["call".to_string(), "info".to_string()]
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: default_args(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            command: CommandConfig::default(),
            markers: Markers::default(),
            log_level: default_log_level(),
        }
    }
}

impl CommandConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

pub fn load_app_config() -> anyhow::Result<AppConfig> {
    load_app_config_from(CONFIG_PATH)
}

pub fn load_app_config_from(path: &str) -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(path).required(false))
        .build()?;

    Ok(settings.try_deserialize()?)
}
