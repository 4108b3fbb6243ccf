use crate::core::error::AppError;
use crate::core::workflow::actions::{
    ACTIONS, BATCH_START_MESSAGE, DEFINITION, INPUTS, LOG_BATCH_START, MESSAGE, VALIDATE_INPUT,
};
use crate::core::workflow::document::WorkflowDocument;
use crate::core::workflow::transform::WorkflowEdit;
use serde_json::Value;

/// Replaces the inner `LogBatchStart` message with a fixed literal.
pub struct RewriteBatchStartMessage;

impl WorkflowEdit for RewriteBatchStartMessage {
    fn name(&self) -> &'static str {
        "RewriteBatchStartMessage"
    }

    fn apply(&self, doc: WorkflowDocument) -> Result<WorkflowDocument, AppError> {
        let mut doc = doc;
        let inputs = doc.object_mut(&[
            DEFINITION,
            ACTIONS,
            VALIDATE_INPUT,
            ACTIONS,
            LOG_BATCH_START,
            INPUTS,
        ])?;
        inputs.insert(
            MESSAGE.to_string(),
            Value::String(BATCH_START_MESSAGE.to_string()),
        );
        Ok(doc)
    }
}
