use log::info;
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use std::sync::Arc;

use crate::error::StoreError;
use crate::models::AppConfig;
use crate::utils::{create_connection_pool, initialize_schema};

/// Application state shared across all request handlers
pub struct AppState {
    pub db_pool: Pool<SqliteConnectionManager>,
}

impl AppState {
    /// Open the pool and make sure every record table exists. A failure here
    /// must stop startup before the listener is bound.
    pub fn initialize(config: &AppConfig) -> Result<Arc<Self>, StoreError> {
        info!("Opening database '{}'", config.database_path);
        let db_pool = create_connection_pool(
            &config.database_path,
            config.get_db_pool_max_size(),
            config.get_db_pool_min_idle(),
            config.get_db_pool_timeout_seconds(),
        )?;

        let conn = db_pool.get()?;
        initialize_schema(&conn)?;

        Ok(Arc::new(Self { db_pool }))
    }
}
