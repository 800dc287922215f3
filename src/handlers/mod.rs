pub mod intake;
pub mod panel;

// Re-exports for convenience
pub use intake::create_submission;
pub use panel::list_records;
