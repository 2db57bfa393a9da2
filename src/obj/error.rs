use thiserror::Error;

/// A parse failure tied to a specific source line.
///
/// `line` is 1-based, matching what an editor would show the user.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("error parsing OBJ on line {line}: {message}")]
pub struct ParseError {
    pub line: usize,
    pub message: String,
}

impl ParseError {
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}
