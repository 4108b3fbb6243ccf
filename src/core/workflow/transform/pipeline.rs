use crate::core::error::AppError;
use crate::core::workflow::document::WorkflowDocument;
use crate::core::workflow::transform::{
    AttachTryScope, FlattenValidationWrapper, RewireRunAfter, RewriteBatchStartMessage,
    WorkflowEdit,
};

/// Edits in the order they must run; later edits read state produced by earlier ones.
pub fn migration_edits() -> Vec<Box<dyn WorkflowEdit>> {
    vec![
        Box::new(AttachTryScope),
        Box::new(RewriteBatchStartMessage),
        Box::new(FlattenValidationWrapper),
        Box::new(RewireRunAfter),
    ]
}

pub fn apply_migration_pipeline(doc: WorkflowDocument) -> Result<WorkflowDocument, AppError> {
    let mut current = doc;
    for edit in migration_edits() {
        tracing::debug!(edit = edit.name(), "applying workflow edit");
        current = edit
            .apply(current)
            .map_err(|err| err.with_context("edit", edit.name()))?;
    }
    Ok(current)
}
