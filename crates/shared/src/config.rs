//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    pub server: ServerConfig,
    /// Activity sync configuration.
    #[serde(default)]
    pub sync: SyncConfig,
    /// Seed data configuration.
    #[serde(default)]
    pub seed: SeedConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Activity sync configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SyncConfig {
    /// Simulated device sync latency in milliseconds.
    #[serde(default = "default_sync_delay_ms")]
    pub delay_ms: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_sync_delay_ms(),
        }
    }
}

fn default_sync_delay_ms() -> u64 {
    1500
}

/// Seed data configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedConfig {
    /// Whether to seed demo accounts at startup.
    #[serde(default = "default_demo_data")]
    pub demo_data: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            demo_data: default_demo_data(),
        }
    }
}

fn default_demo_data() -> bool {
    true
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("STRIDEBANK").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
