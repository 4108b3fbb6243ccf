use crate::core::error::AppError;
use crate::core::workflow::actions::{
    ACTIONS, DEFINITION, FOR_EACH_EMPLOYEE, INITIALIZE_RESULTS, LOG_BATCH_COMPLETE,
    LOG_BATCH_START, LOG_START_OF_WORKFLOW, SUCCESS_RESPONSE, VALIDATE_INPUT,
};
use crate::core::workflow::document::{join_path, object_at_mut, take_entry, WorkflowDocument};
use crate::core::workflow::transform::WorkflowEdit;
use serde_json::Map;

const ROOT_ACTIONS_PATH: &str = "definition.actions";

/// Actions kept from the root mapping.
const KEPT_ROOT_ACTIONS: [&str; 2] = [LOG_START_OF_WORKFLOW, INITIALIZE_RESULTS];

/// Actions lifted out of the `ValidateInput` wrapper.
const LIFTED_INNER_ACTIONS: [&str; 4] = [
    LOG_BATCH_START,
    FOR_EACH_EMPLOYEE,
    LOG_BATCH_COMPLETE,
    SUCCESS_RESPONSE,
];

/// Drops the `ValidateInput` wrapper and rebuilds `definition.actions` as a flat
/// mapping. Nodes are moved into the new mapping, never cloned; every other root
/// action is discarded.
pub struct FlattenValidationWrapper;

impl WorkflowEdit for FlattenValidationWrapper {
    fn name(&self) -> &'static str {
        "FlattenValidationWrapper"
    }

    fn apply(&self, doc: WorkflowDocument) -> Result<WorkflowDocument, AppError> {
        let mut doc = doc;
        let root_actions = doc.object_mut(&[DEFINITION, ACTIONS])?;

        let mut wrapper = take_entry(root_actions, ROOT_ACTIONS_PATH, VALIDATE_INPUT)?;
        let wrapper_path = join_path(ROOT_ACTIONS_PATH, VALIDATE_INPUT);
        let inner_actions = object_at_mut(&mut wrapper, &wrapper_path, &[ACTIONS])?;
        let inner_path = join_path(&wrapper_path, ACTIONS);

        let mut flat = Map::new();
        for name in KEPT_ROOT_ACTIONS {
            let action = take_entry(root_actions, ROOT_ACTIONS_PATH, name)?;
            flat.insert(name.to_string(), action);
        }
        for name in LIFTED_INNER_ACTIONS {
            let action = take_entry(inner_actions, &inner_path, name)?;
            flat.insert(name.to_string(), action);
        }

        for dropped in root_actions.keys().chain(inner_actions.keys()) {
            tracing::debug!(action = %dropped, "dropping action");
        }
        tracing::debug!(dropped = VALIDATE_INPUT, "dropping validation wrapper");

        *root_actions = flat;
        Ok(doc)
    }
}
