//! Parse error types for rule files.

use thiserror::Error;

use crate::rules::RuleError;

/// An error that occurred while parsing a rule file.
///
/// Lines and columns are 1-based; columns count characters.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A syntax error with location information.
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// Unexpected end of input.
    #[error("unexpected end of input at {line}:{column}")]
    UnexpectedEof { line: usize, column: usize },

    /// A well-formed rule with invalid content.
    #[error("invalid rule at {line}:{column}: {source}")]
    Rule {
        line: usize,
        column: usize,
        #[source]
        source: RuleError,
    },
}

impl ParseError {
    /// Line and column the error points at.
    pub fn location(&self) -> (usize, usize) {
        match self {
            ParseError::Syntax { line, column, .. }
            | ParseError::UnexpectedEof { line, column }
            | ParseError::Rule { line, column, .. } => (*line, *column),
        }
    }

    /// Description of the error without its location.
    pub fn message(&self) -> String {
        match self {
            ParseError::Syntax { message, .. } => message.clone(),
            ParseError::UnexpectedEof { .. } => "unexpected end of file".to_string(),
            ParseError::Rule { source, .. } => source.to_string(),
        }
    }
}
