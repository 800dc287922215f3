use serde::Deserialize;
use std::env;
use std::path::Path;

const DEFAULT_PORT: u16 = 3000;
const ENV_PREFIX: &str = "OUVIDORIA";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_path: String,
    pub port: u16,
    pub bind_address: String,
    pub static_dir: String,
    pub log_path: Option<String>,
    pub log_level: String,
    max_workers: Option<usize>,
    max_body_size: Option<usize>,         // Maximum request body in bytes, default to 1 MiB
    db_pool_max_size: Option<u32>,        // Maximum number of connections in pool
    db_pool_min_idle: Option<u32>,        // Minimum idle connections to maintain
    db_pool_timeout_seconds: Option<u64>, // Connection acquisition timeout
}

impl AppConfig {
    /// Load configuration from built-in defaults, an optional TOML file,
    /// `OUVIDORIA_*` environment variables and finally `PORT`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .set_default("database_path", "banco.db")?
            .set_default("port", i64::from(DEFAULT_PORT))?
            .set_default("bind_address", "0.0.0.0")?
            .set_default("static_dir", "public")?
            .set_default("log_level", "info")?
            .add_source(config::File::from(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .set_override_option("port", env::var("PORT").ok())?
            .build()?;
        settings.try_deserialize()
    }

    pub fn with_database_path(mut self, path: impl Into<String>) -> Self {
        self.database_path = path.into();
        self
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }

    pub fn get_max_workers(&self) -> usize {
        self.max_workers.unwrap_or_else(num_cpus::get) // Default to number of CPU cores
    }

    pub fn get_max_body_size(&self) -> usize {
        self.max_body_size.unwrap_or(1024 * 1024)
    }

    pub fn get_db_pool_max_size(&self) -> u32 {
        self.db_pool_max_size.unwrap_or(8)
    }

    pub fn get_db_pool_min_idle(&self) -> u32 {
        self.db_pool_min_idle.unwrap_or(1)
    }

    pub fn get_db_pool_timeout_seconds(&self) -> u64 {
        self.db_pool_timeout_seconds.unwrap_or(30)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: "banco.db".to_string(),
            port: DEFAULT_PORT,
            bind_address: "0.0.0.0".to_string(),
            static_dir: "public".to_string(),
            log_path: None,
            log_level: "info".to_string(),
            max_workers: None,
            max_body_size: None,
            db_pool_max_size: None,
            db_pool_min_idle: None,
            db_pool_timeout_seconds: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_config_file() {
        let config = AppConfig::load("does-not-exist.toml").expect("defaults should load");
        assert_eq!(config.database_path, "banco.db");
        assert_eq!(config.static_dir, "public");
        assert_eq!(config.get_max_body_size(), 1024 * 1024);
        assert_eq!(config.get_db_pool_max_size(), 8);
        assert!(config.log_path.is_none());
    }

    #[test]
    fn bind_addr_joins_address_and_port() {
        let config = AppConfig {
            port: 8080,
            bind_address: "127.0.0.1".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }
}
