//! CSS parsing errors.

use crate::tokenizer::Token;

/// CSS parse error with location information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The error message describing what went wrong.
    pub message: String,
    /// Line number where the error occurred (1-indexed).
    pub line: u32,
    /// Column number where the error occurred (1-indexed).
    pub column: u32,
    /// Set when recovery is impossible and parsing must stop.
    pub fatal: bool,
}

impl ParseError {
    /// Create a new parse error with the given message and location.
    pub fn new(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            message: message.into(),
            line,
            column,
            fatal: false,
        }
    }

    /// Create an error located at `token`.
    pub fn at(message: impl Into<String>, token: &Token) -> Self {
        Self::new(message, token.line, token.column)
    }

    /// Mark the error as unrecoverable.
    pub fn into_fatal(mut self) -> Self {
        self.fatal = true;
        self
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CSS parse error at {}:{}: {}", self.line, self.column, self.message)
    }
}

impl std::error::Error for ParseError {}
