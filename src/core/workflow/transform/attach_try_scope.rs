use crate::core::error::AppError;
use crate::core::workflow::actions::{
    ACTIONS, DEFINITION, FOR_EACH_EMPLOYEE, TRY_SCOPE, VALIDATE_INPUT,
};
use crate::core::workflow::document::WorkflowDocument;
use crate::core::workflow::transform::WorkflowEdit;
use crate::core::workflow::try_scope::build_try_scope;

/// Adds the stored procedure `Try` scope as a child of the `ForEachEmployee`
/// loop nested inside `ValidateInput`.
pub struct AttachTryScope;

impl WorkflowEdit for AttachTryScope {
    fn name(&self) -> &'static str {
        "AttachTryScope"
    }

    fn apply(&self, doc: WorkflowDocument) -> Result<WorkflowDocument, AppError> {
        let mut doc = doc;
        let loop_actions = doc.object_mut(&[
            DEFINITION,
            ACTIONS,
            VALIDATE_INPUT,
            ACTIONS,
            FOR_EACH_EMPLOYEE,
            ACTIONS,
        ])?;
        // An existing `Try` child is replaced where it stands.
        if loop_actions
            .insert(TRY_SCOPE.to_string(), build_try_scope())
            .is_some()
        {
            tracing::warn!("replaced existing Try scope under ForEachEmployee");
        }
        Ok(doc)
    }
}
