//! Literal node names of the UpsertEmployee workflow touched by the migration.

use serde_json::{json, Map, Value};

pub const DEFINITION: &str = "definition";
pub const ACTIONS: &str = "actions";
pub const INPUTS: &str = "inputs";
pub const MESSAGE: &str = "message";
pub const RUN_AFTER: &str = "runAfter";
pub const SUCCEEDED: &str = "Succeeded";

pub const VALIDATE_INPUT: &str = "ValidateInput";
pub const LOG_START_OF_WORKFLOW: &str = "LogStartOfWorkflow";
pub const INITIALIZE_RESULTS: &str = "InitializeResults";
pub const LOG_BATCH_START: &str = "LogBatchStart";
pub const FOR_EACH_EMPLOYEE: &str = "ForEachEmployee";
pub const LOG_BATCH_COMPLETE: &str = "LogBatchComplete";
pub const SUCCESS_RESPONSE: &str = "SuccessResponse";

pub const TRY_SCOPE: &str = "Try";
pub const LOG_EMPLOYEE_START: &str = "LogEmployeeStart";
pub const EXECUTE_UPSERT_STORED_PROCEDURE: &str = "ExecuteUpsertStoredProcedure";
pub const APPEND_UPSERT_RESULT: &str = "AppendUpsertResult";

pub const BATCH_START_MESSAGE: &str = "Starting batch processing";

/// Root actions of the flattened definition, in output order.
pub const FLAT_ACTION_ORDER: [&str; 6] = [
    LOG_START_OF_WORKFLOW,
    INITIALIZE_RESULTS,
    LOG_BATCH_START,
    FOR_EACH_EMPLOYEE,
    LOG_BATCH_COMPLETE,
    SUCCESS_RESPONSE,
];

/// `runAfter` mapping requiring a single predecessor to have succeeded.
pub fn run_after(predecessor: &str) -> Value {
    let mut map = Map::new();
    map.insert(predecessor.to_string(), json!([SUCCEEDED]));
    Value::Object(map)
}

/// Reference expression reading `field` from the current `ForEachEmployee` item.
pub fn item_ref(field: &str) -> String {
    format!("@items('{}')?['{}']", FOR_EACH_EMPLOYEE, field)
}
