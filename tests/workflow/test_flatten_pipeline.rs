use serde_json::{json, Value};
use workflow_flatten::core::types::ErrorCategory;
use workflow_flatten::core::workflow::{
    apply_migration_pipeline, transform, verify_run_after_targets, WorkflowDocument,
};

const FIXTURE: &str = include_str!("../fixtures/upsert_employee_workflow.json");

fn fixture_value() -> Value {
    serde_json::from_str(FIXTURE).expect("fixture json")
}

fn migrated() -> WorkflowDocument {
    let doc = WorkflowDocument::parse(FIXTURE).expect("parse fixture");
    apply_migration_pipeline(doc).expect("migrate")
}

fn keys(value: &Value) -> Vec<&str> {
    value
        .as_object()
        .expect("object")
        .keys()
        .map(String::as_str)
        .collect()
}

#[test]
fn p1_root_actions_are_flat_and_ordered() {
    let doc = migrated();
    assert_eq!(
        keys(&doc.root()["definition"]["actions"]),
        vec![
            "LogStartOfWorkflow",
            "InitializeResults",
            "LogBatchStart",
            "ForEachEmployee",
            "LogBatchComplete",
            "SuccessResponse"
        ]
    );
}

#[test]
fn p2_try_scope_is_appended_to_loop_children() {
    let doc = migrated();
    let each = &doc.root()["definition"]["actions"]["ForEachEmployee"];
    assert_eq!(
        keys(&each["actions"]),
        vec!["CheckEmployeeExists", "UpdateOrInsert", "Try"]
    );
    let scope = &each["actions"]["Try"];
    assert_eq!(scope["type"], "Scope");
    assert_eq!(scope["runAfter"], json!({}));
    assert_eq!(
        keys(&scope["actions"]),
        vec![
            "LogEmployeeStart",
            "ExecuteUpsertStoredProcedure",
            "AppendUpsertResult"
        ]
    );
    assert_eq!(
        scope["actions"]["AppendUpsertResult"]["runAfter"],
        json!({"ExecuteUpsertStoredProcedure": ["Succeeded"]})
    );
}

#[test]
fn p3_stored_procedure_parameters_read_loop_item() {
    let doc = migrated();
    let parameters = &doc.root()["definition"]["actions"]["ForEachEmployee"]["actions"]["Try"]
        ["actions"]["ExecuteUpsertStoredProcedure"]["inputs"]["parameters"];
    assert_eq!(parameters["procedureName"], "UpsertEmployee");
    let procedure = parameters["procedureParameters"]
        .as_object()
        .expect("procedure parameters");
    assert_eq!(procedure.len(), 7);
    for name in [
        "ID",
        "FirstName",
        "LastName",
        "Department",
        "Position",
        "Salary",
        "Email",
    ] {
        let binding = procedure[name].as_str().expect("string binding");
        assert!(binding.contains("items('ForEachEmployee')"), "{}", name);
    }
}

#[test]
fn p4_batch_start_message_is_replaced() {
    let doc = migrated();
    let inputs = &doc.root()["definition"]["actions"]["LogBatchStart"]["inputs"];
    assert_eq!(inputs["message"], "Starting batch processing");
    assert_eq!(inputs["timestamp"], "@utcNow()");
}

#[test]
fn p5_lifted_actions_are_rewired() {
    let doc = migrated();
    let actions = &doc.root()["definition"]["actions"];
    assert_eq!(
        actions["LogBatchStart"]["runAfter"],
        json!({"InitializeResults": ["Succeeded"]})
    );
    assert_eq!(
        actions["ForEachEmployee"]["runAfter"],
        json!({"LogBatchStart": ["Succeeded"]})
    );
    verify_run_after_targets(&doc).expect("all predecessors are siblings");
}

#[test]
fn p6_moved_actions_keep_their_content() {
    let original = fixture_value();
    let doc = migrated();
    let actions = &doc.root()["definition"]["actions"];
    let inner = &original["definition"]["actions"]["ValidateInput"]["actions"];
    assert_eq!(actions["SuccessResponse"], inner["SuccessResponse"]);
    assert_eq!(actions["LogBatchComplete"], inner["LogBatchComplete"]);
    assert_eq!(
        actions["InitializeResults"],
        original["definition"]["actions"]["InitializeResults"]
    );
}

#[test]
fn p7_untouched_nodes_keep_value_and_order() {
    let original = fixture_value();
    let doc = migrated();
    assert_eq!(keys(doc.root()), vec!["definition", "kind"]);
    assert_eq!(
        keys(&doc.root()["definition"]),
        vec!["$schema", "actions", "contentVersion", "outputs", "triggers"]
    );
    assert_eq!(
        doc.root()["definition"]["triggers"],
        original["definition"]["triggers"]
    );
    assert_eq!(doc.root()["kind"], "Stateful");
}

#[test]
fn p8_missing_validate_input_is_fatal() {
    let mut value = fixture_value();
    value["definition"]["actions"]
        .as_object_mut()
        .expect("actions")
        .remove("ValidateInput");
    let err = apply_migration_pipeline(WorkflowDocument::new(value)).expect_err("must fail");
    assert_eq!(err.category, ErrorCategory::MissingKey);
    assert_eq!(err.code, "WFF-KEY-001");
    assert_eq!(
        err.context.get("edit").map(String::as_str),
        Some("AttachTryScope")
    );
}

#[test]
fn p9_missing_inner_batch_start_is_fatal() {
    let mut value = fixture_value();
    value["definition"]["actions"]["ValidateInput"]["actions"]
        .as_object_mut()
        .expect("inner actions")
        .remove("LogBatchStart");
    let err = apply_migration_pipeline(WorkflowDocument::new(value)).expect_err("must fail");
    assert_eq!(
        err.context.get("path").map(String::as_str),
        Some("definition.actions.ValidateInput.actions.LogBatchStart")
    );
    assert_eq!(
        err.context.get("edit").map(String::as_str),
        Some("RewriteBatchStartMessage")
    );
}

#[test]
fn p10_second_run_fails_on_migrated_output() {
    let doc = migrated();
    let err = apply_migration_pipeline(doc).expect_err("not idempotent");
    assert_eq!(err.category, ErrorCategory::MissingKey);
}

#[test]
fn p11_edits_run_in_fixed_order() {
    let names: Vec<&str> = transform::migration_edits()
        .iter()
        .map(|edit| edit.name())
        .collect();
    assert_eq!(
        names,
        vec![
            "AttachTryScope",
            "RewriteBatchStartMessage",
            "FlattenValidationWrapper",
            "RewireRunAfter"
        ]
    );
}
