pub mod config;
pub mod record;
pub mod state;
pub mod submission;

// Re-exports for convenience
pub use config::AppConfig;
pub use record::{
    ComplaintRecord, Created, FeedbackRecord, Listing, StoredRecord, SuggestionRecord,
};
pub use state::AppState;
pub use submission::{
    AccessRequestForm, ComplaintForm, ContactForm, FeedbackForm, Field, Submission, SuggestionForm,
};
