use crate::core::types::ErrorCategory;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

#[derive(Debug)]
pub struct AppError {
    pub category: ErrorCategory,
    pub code: String,
    pub message: String,
    pub context: BTreeMap<String, String>,
    pub recovery_suggestions: Vec<String>,
    pub occurred_at: DateTime<Utc>,
    pub source: Option<anyhow::Error>,
}

impl AppError {
    pub fn new<T: Into<String>>(category: ErrorCategory, message: T) -> Self {
        AppError {
            category,
            code: format!("ERR-{}", uuid::Uuid::new_v4()),
            message: message.into(),
            context: BTreeMap::new(),
            recovery_suggestions: vec![],
            occurred_at: Utc::now(),
            source: None,
        }
    }

    pub fn with_source<T: Into<String>>(
        category: ErrorCategory,
        message: T,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        let mut error = AppError::new(category, message);
        error.source = Some(anyhow::Error::new(source));
        error
    }

    pub fn with_code<T: Into<String>>(mut self, code: T) -> Self {
        self.code = code.into();
        self
    }

    pub fn with_context<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    pub fn with_suggestion<T: Into<String>>(mut self, suggestion: T) -> Self {
        self.recovery_suggestions.push(suggestion.into());
        self
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.code, self.category, self.message)?;
        if !self.context.is_empty() {
            write!(f, " (Context: {:?})", self.context)?;
        }
        if let Some(ref source) = self.source {
            write!(f, "\nCaused by: {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::new(ErrorCategory::SerializationError, e.to_string())
            .with_code("WFF-SER-001")
    }
}

pub trait ErrorReporter {
    fn report_error(&self, error: &AppError);
    fn report_failure(&self, error: &anyhow::Error);
}

/// Writes failures to stderr in the `[ERROR] code: message` layout.
pub struct DefaultErrorReporter;

impl DefaultErrorReporter {
    pub fn new() -> Self {
        DefaultErrorReporter
    }

    /// Render an error exactly as `report_error` prints it.
    pub fn render(error: &AppError) -> String {
        let mut lines = vec![format!("[ERROR] {}: {}", error.code, error.message)];
        for (key, value) in &error.context {
            lines.push(format!("  {}: {}", key, value));
        }
        if let Some(ref source) = error.source {
            lines.push(format!("  Caused by: {}", source));
        }
        for suggestion in &error.recovery_suggestions {
            lines.push(format!("  Hint: {}", suggestion));
        }
        lines.join("\n")
    }
}

impl Default for DefaultErrorReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorReporter for DefaultErrorReporter {
    fn report_error(&self, error: &AppError) {
        eprintln!("{}", Self::render(error));
    }

    fn report_failure(&self, error: &anyhow::Error) {
        match error.downcast_ref::<AppError>() {
            Some(app_error) => self.report_error(app_error),
            None => eprintln!("[ERROR] {:#}", error),
        }
    }
}
