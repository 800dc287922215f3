pub mod db;
pub mod logging;
pub mod payload;

// Re-exports for convenience
pub use db::{
    create_connection_pool, initialize_schema, insert_submission, select_all, with_connection,
};
pub use logging::initialize_logger;
pub use payload::Payload;
