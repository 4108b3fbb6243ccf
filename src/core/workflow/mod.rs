//! Loading, migrating and writing the UpsertEmployee workflow definition.

// Fallible operations here return AppError for structured diagnostics.
#![allow(clippy::result_large_err)]

pub mod actions;
pub mod document;
pub mod transform;
pub mod try_scope;
pub mod verify;
pub mod writer;

pub use document::{PathError, WorkflowDocument};
pub use transform::apply_migration_pipeline;
pub use verify::verify_run_after_targets;
