/// Error category enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Input workflow file does not exist.
    NotFound,
    /// Input is not well-formed JSON.
    ParseError,
    /// An expected literal key is absent from the document.
    MissingKey,
    /// A node has the wrong JSON type or a `runAfter` entry dangles.
    ValidationError,
    /// The migrated tree could not be rendered as JSON.
    SerializationError,
    /// Reading or writing the workflow file failed.
    IoError,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
