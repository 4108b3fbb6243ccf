use crate::core::workflow::actions::{
    item_ref, run_after, APPEND_UPSERT_RESULT, EXECUTE_UPSERT_STORED_PROCEDURE, LOG_EMPLOYEE_START,
};
use serde_json::{json, Map, Value};

const WORKFLOW_NAME: &str = "UpsertEmployee";
const PROCEDURE_NAME: &str = "UpsertEmployee";
const RESULTS_VARIABLE: &str = "ProcessingResults";

/// Stored procedure parameter name paired with the loop item field it reads.
pub const PROCEDURE_PARAMETERS: [(&str, &str); 7] = [
    ("ID", "id"),
    ("FirstName", "firstName"),
    ("LastName", "lastName"),
    ("Department", "department"),
    ("Position", "position"),
    ("Salary", "salary"),
    ("Email", "email"),
];

/// Build the `Try` scope that replaces the check/update/insert branch with a
/// single `UpsertEmployee` stored procedure call per employee.
pub fn build_try_scope() -> Value {
    let mut actions = Map::new();
    actions.insert(LOG_EMPLOYEE_START.to_string(), log_employee_start());
    actions.insert(
        EXECUTE_UPSERT_STORED_PROCEDURE.to_string(),
        execute_upsert_stored_procedure(),
    );
    actions.insert(APPEND_UPSERT_RESULT.to_string(), append_upsert_result());

    json!({
        "type": "Scope",
        "actions": actions,
        "runAfter": {}
    })
}

fn log_employee_start() -> Value {
    json!({
        "type": "Compose",
        "inputs": {
            "timestamp": "@utcNow()",
            "workflowName": WORKFLOW_NAME,
            "runId": "@workflow().run.name",
            "logLevel": "INFO",
            "message": "Processing employee via stored procedure",
            "employeeID": item_ref("id"),
            "firstName": item_ref("firstName"),
            "lastName": item_ref("lastName")
        },
        "runAfter": {}
    })
}

fn execute_upsert_stored_procedure() -> Value {
    let parameters: Map<String, Value> = PROCEDURE_PARAMETERS
        .iter()
        .map(|(name, field)| (name.to_string(), Value::String(item_ref(field))))
        .collect();

    json!({
        "type": "ServiceProvider",
        "inputs": {
            "parameters": {
                "procedureName": PROCEDURE_NAME,
                "procedureParameters": parameters
            },
            "serviceProviderConfiguration": {
                "connectionName": "sql",
                "operationId": "executeProcedure",
                "serviceProviderId": "/serviceProviders/sql"
            }
        },
        "runAfter": run_after(LOG_EMPLOYEE_START)
    })
}

fn append_upsert_result() -> Value {
    json!({
        "type": "AppendToArrayVariable",
        "inputs": {
            "name": RESULTS_VARIABLE,
            "value": {
                "employeeID": item_ref("id"),
                "firstName": item_ref("firstName"),
                "lastName": item_ref("lastName"),
                "operation": "UPSERT",
                "status": "success",
                "timestamp": "@utcNow()"
            }
        },
        "runAfter": run_after(EXECUTE_UPSERT_STORED_PROCEDURE)
    })
}
