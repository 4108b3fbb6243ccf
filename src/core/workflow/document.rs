use crate::core::error::AppError;
use crate::core::types::ErrorCategory;
use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use thiserror::Error;

/// Lookup failure while walking a literal key path through the document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("missing key '{key}' under '{parent}'")]
    MissingKey { parent: String, key: String },
    #[error("expected an object at '{path}', found {found}")]
    NotAnObject { path: String, found: &'static str },
}

impl PathError {
    /// Full dotted path of the node that could not be resolved.
    pub fn path(&self) -> String {
        match self {
            PathError::MissingKey { parent, key } => join_path(parent, key),
            PathError::NotAnObject { path, .. } => path.clone(),
        }
    }
}

impl From<PathError> for AppError {
    fn from(err: PathError) -> Self {
        let path = err.path();
        match err {
            PathError::MissingKey { .. } => {
                AppError::new(ErrorCategory::MissingKey, err.to_string())
                    .with_code("WFF-KEY-001")
                    .with_context("path", path)
                    .with_suggestion(
                        "The migration only accepts the pre-flattening UpsertEmployee workflow",
                    )
            }
            PathError::NotAnObject { .. } => {
                AppError::new(ErrorCategory::ValidationError, err.to_string())
                    .with_code("WFF-KEY-002")
                    .with_context("path", path)
            }
        }
    }
}

/// In-memory workflow definition; mapping order is insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowDocument {
    root: Value,
}

impl WorkflowDocument {
    pub fn new(root: Value) -> Self {
        WorkflowDocument { root }
    }

    /// Read and parse a workflow JSON file. No schema validation is applied.
    pub fn load_from_file(path: &Path) -> Result<Self, AppError> {
        let text = fs::read_to_string(path).map_err(|err| {
            let (category, code) = if err.kind() == ErrorKind::NotFound {
                (ErrorCategory::NotFound, "WFF-IO-001")
            } else {
                (ErrorCategory::IoError, "WFF-IO-002")
            };
            AppError::with_source(
                category,
                format!("failed to read {}", path.display()),
                err,
            )
            .with_code(code)
            .with_context("path", path.display().to_string())
        })?;
        Self::parse(&text).map_err(|err| err.with_context("path", path.display().to_string()))
    }

    pub fn parse(text: &str) -> Result<Self, AppError> {
        let root: Value = serde_json::from_str(text).map_err(|err| {
            let line = err.line().to_string();
            let column = err.column().to_string();
            AppError::with_source(ErrorCategory::ParseError, "malformed workflow JSON", err)
                .with_code("WFF-PARSE-001")
                .with_context("line", line)
                .with_context("column", column)
        })?;
        Ok(WorkflowDocument::new(root))
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Resolve the mapping at `path` from the document root.
    pub fn object_mut(&mut self, path: &[&str]) -> Result<&mut Map<String, Value>, PathError> {
        object_at_mut(&mut self.root, "", path)
    }

    pub fn object(&self, path: &[&str]) -> Result<&Map<String, Value>, PathError> {
        let mut current = &self.root;
        let mut walked = String::new();
        for key in path {
            let map = current.as_object().ok_or_else(|| not_an_object(&walked, current))?;
            current = map.get(*key).ok_or_else(|| missing_key(&walked, key))?;
            walked = join_path(&walked, key);
        }
        current.as_object().ok_or_else(|| not_an_object(&walked, current))
    }
}

/// Walk `path` below `value`, whose own location is `origin`, and return the mapping there.
pub fn object_at_mut<'a>(
    value: &'a mut Value,
    origin: &str,
    path: &[&str],
) -> Result<&'a mut Map<String, Value>, PathError> {
    let mut current = value;
    let mut walked = origin.to_string();
    for key in path {
        let found = json_type(current);
        let map = current.as_object_mut().ok_or_else(|| PathError::NotAnObject {
            path: display_path(&walked),
            found,
        })?;
        current = map.get_mut(*key).ok_or_else(|| missing_key(&walked, key))?;
        walked = join_path(&walked, key);
    }
    let found = json_type(current);
    current.as_object_mut().ok_or(PathError::NotAnObject {
        path: display_path(&walked),
        found,
    })
}

/// Remove `key` from `map` (located at `parent`), failing if it is absent.
pub fn take_entry(
    map: &mut Map<String, Value>,
    parent: &str,
    key: &str,
) -> Result<Value, PathError> {
    map.remove(key).ok_or_else(|| missing_key(parent, key))
}

pub fn join_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

fn display_path(path: &str) -> String {
    if path.is_empty() {
        "<root>".to_string()
    } else {
        path.to_string()
    }
}

fn missing_key(parent: &str, key: &str) -> PathError {
    PathError::MissingKey {
        parent: display_path(parent),
        key: key.to_string(),
    }
}

fn not_an_object(path: &str, value: &Value) -> PathError {
    PathError::NotAnObject {
        path: display_path(path),
        found: json_type(value),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
