use config::{Config, ConfigError, Environment};
use once_cell::sync::Lazy;
use serde::Deserialize;

pub static CONFIG: Lazy<AppConfig> =
    Lazy::new(|| AppConfig::load().unwrap_or_else(|e| panic!("Failed to load config: {}", e)));

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub page_size: u16,
    pub log_level: String,
}

impl AppConfig {
    /// Defaults first, then `TRIVIA__*` environment variables
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_environment(Environment::with_prefix("TRIVIA").separator("__"))
    }

    fn from_environment(env: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.address", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("server.page_size", 10)?
            .set_default("server.log_level", "debug")?
            .add_source(env.try_parsing(true))
            .build()?
            .try_deserialize()
    }
}
