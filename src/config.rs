use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub upstream: UpstreamSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamSettings {
    pub randomuser_url: String,
    pub echo_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_timeout_secs() -> u64 { 30 }
fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Built-in defaults
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with PROXY__)
    /// 5. A bare PORT variable
    pub fn load() -> Result<Self, ConfigError> {
        let settings = with_defaults(Config::builder())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., PROXY__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?;

        apply_port_override(settings, std::env::var("PORT").ok())?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = with_defaults(Config::builder())?
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        settings.try_deserialize()
    }
}

fn with_defaults(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
    builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8080)?
        .set_default("upstream.randomuser_url", "https://randomuser.me/api")?
        .set_default("upstream.echo_url", "https://reqbin.com/echo/post/json")?
        .set_default("upstream.timeout_secs", default_timeout_secs())?
        .set_default("logging.level", default_log_level())?
        .set_default("logging.format", default_log_format())
}

fn environment() -> Environment {
    Environment::with_prefix("PROXY")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Platforms commonly hand the listen port over as a bare PORT variable
fn apply_port_override(settings: Config, port: Option<String>) -> Result<Config, ConfigError> {
    match port {
        Some(port) => Config::builder()
            .add_source(settings)
            .set_override("server.port", port)?
            .build(),
        None => Ok(settings),
    }
}
