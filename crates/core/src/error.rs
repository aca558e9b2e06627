use thiserror::Error;

#[derive(Error, Debug)]
pub enum AstError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Parsing error: {0}")]
    Parsing(String),
    #[error("Unknown grammar rule index: {0}")]
    UnknownRule(usize),
    #[error("Invalid parse tree notation at offset {offset}: {message}")]
    Notation { offset: usize, message: String },
}

pub type Result<T> = std::result::Result<T, AstError>;

/// A required sub-structure was missing where the grammar guarantees it, or a
/// node fell through a classification that was supposed to be exhaustive.
///
/// Extractors never propagate these past a single field of a function
/// descriptor: they are logged and the field degrades to absent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("{what} wasn't found under `{near}`")]
    MissingStructure { what: &'static str, near: String },
    #[error("no enclosing element kind matches `{label}`")]
    UnclassifiedEnclosing { label: String },
    #[error("found `{label}` without an enclosing element")]
    DetachedBody { label: String },
}

pub type ExtractionResult<T> = std::result::Result<T, ExtractionError>;

impl ExtractionError {
    pub fn missing(what: &'static str, near: crate::model::NodeRef<'_>) -> Self {
        ExtractionError::MissingStructure {
            what,
            near: near.type_label(),
        }
    }
}
