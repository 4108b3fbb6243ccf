use crate::core::error::AppError;
use crate::core::types::ErrorCategory;
use crate::core::workflow::actions::{ACTIONS, DEFINITION, RUN_AFTER};
use crate::core::workflow::document::WorkflowDocument;

/// Confirm every `runAfter` entry of a root action names a sibling root action.
///
/// This is the only structural check made on the output; no schema is applied.
pub fn verify_run_after_targets(doc: &WorkflowDocument) -> Result<(), AppError> {
    let actions = doc.object(&[DEFINITION, ACTIONS])?;
    for (name, action) in actions {
        let Some(run_after) = action.get(RUN_AFTER).and_then(|value| value.as_object()) else {
            continue;
        };
        for predecessor in run_after.keys() {
            if !actions.contains_key(predecessor) {
                return Err(AppError::new(
                    ErrorCategory::ValidationError,
                    format!(
                        "action '{}' runs after '{}', which is not a sibling action",
                        name, predecessor
                    ),
                )
                .with_code("WFF-GRAPH-001")
                .with_context("action", name.as_str())
                .with_context("predecessor", predecessor.as_str()));
            }
        }
    }
    Ok(())
}
