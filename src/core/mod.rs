pub mod error;
pub mod summary;
pub mod types;
pub mod workflow;

pub use error::{AppError, DefaultErrorReporter, ErrorReporter};
pub use types::ErrorCategory;
pub use workflow::{apply_migration_pipeline, WorkflowDocument};
