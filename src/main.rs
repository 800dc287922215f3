use log::info;
use std::env;

use ouvidoria::models::AppConfig;
use ouvidoria::utils::initialize_logger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line argument for config file path
    let config_path = env::args().nth(1).unwrap_or_else(|| "config.toml".to_string());
    let config = AppConfig::load(&config_path)?;

    initialize_logger(config.log_path.as_deref(), &config.log_level)?;
    info!("Loaded configuration from '{config_path}' (file optional)");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.get_max_workers())
        .enable_all()
        .build()?;

    runtime.block_on(ouvidoria::run(config))
}
