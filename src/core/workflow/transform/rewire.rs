use crate::core::error::AppError;
use crate::core::workflow::actions::{
    run_after, ACTIONS, DEFINITION, FOR_EACH_EMPLOYEE, INITIALIZE_RESULTS, LOG_BATCH_START,
    RUN_AFTER,
};
use crate::core::workflow::document::WorkflowDocument;
use crate::core::workflow::transform::WorkflowEdit;

/// (action, sole predecessor) pairs for the flattened chain.
const PREDECESSORS: [(&str, &str); 2] = [
    (LOG_BATCH_START, INITIALIZE_RESULTS),
    (FOR_EACH_EMPLOYEE, LOG_BATCH_START),
];

/// Re-points the lifted actions at their new root-level predecessors.
pub struct RewireRunAfter;

impl WorkflowEdit for RewireRunAfter {
    fn name(&self) -> &'static str {
        "RewireRunAfter"
    }

    fn apply(&self, doc: WorkflowDocument) -> Result<WorkflowDocument, AppError> {
        let mut doc = doc;
        for (action, predecessor) in PREDECESSORS {
            let node = doc.object_mut(&[DEFINITION, ACTIONS, action])?;
            node.insert(RUN_AFTER.to_string(), run_after(predecessor));
        }
        Ok(doc)
    }
}
