use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompareError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parse Error (line {line}): {message}")]
    Parse { line: u64, message: String },

    #[error("Duplicate identifier '{id}' (line {line})")]
    DuplicateIdentifier { id: String, line: u64 },

    #[error("No common identifiers between {method_a} and {method_b}")]
    EmptyInput { method_a: String, method_b: String },

    #[error("Configuration Error: {0}")]
    Config(String),
}

impl CompareError {
    pub(crate) fn parse(line: u64, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}

pub type CmpResult<T> = Result<T, CompareError>;
