use crate::core::error::AppError;
use crate::core::workflow::document::WorkflowDocument;

mod attach_try_scope;
mod batch_start;
mod flatten;
mod pipeline;
mod rewire;

pub use attach_try_scope::AttachTryScope;
pub use batch_start::RewriteBatchStartMessage;
pub use flatten::FlattenValidationWrapper;
pub use pipeline::{apply_migration_pipeline, migration_edits};
pub use rewire::RewireRunAfter;

/// One fixed structural edit over the loaded workflow. Preconditions are literal
/// key lookups; a missing key fails the edit and the whole migration.
pub trait WorkflowEdit {
    fn name(&self) -> &'static str;
    fn apply(&self, doc: WorkflowDocument) -> Result<WorkflowDocument, AppError>;
}
