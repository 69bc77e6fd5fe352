//! Miette diagnostic wrapper for rule file errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![expect(unused_assignments)]

use miette::{Diagnostic, NamedSource, SourceSpan};
use petrovich::parser::ParseError;
use std::path::Path;
use thiserror::Error;

/// A miette-compatible diagnostic for rule file errors.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid rules: {message}")]
#[diagnostic(code(petrovich::rules))]
pub struct RulesDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl RulesDiagnostic {
    /// Create a diagnostic from a text format ParseError with source context.
    pub fn from_parse_error(path: &Path, content: &str, err: &ParseError) -> Self {
        let (line, column) = err.location();
        let help = match err {
            ParseError::Rule { .. } => {
                Some("a rule needs at least one test string and exactly 5 modifiers".to_string())
            }
            ParseError::Syntax { .. } | ParseError::UnexpectedEof { .. } => None,
        };
        Self::at(path, content, line, column, err.message(), help)
    }

    /// Create a diagnostic from a JSON decoding error with source context.
    pub fn from_json_error(path: &Path, content: &str, err: &serde_json::Error) -> Self {
        Self::at(path, content, err.line(), err.column(), err.to_string(), None)
    }

    fn at(
        path: &Path,
        content: &str,
        line: usize,
        column: usize,
        message: String,
        help: Option<String>,
    ) -> Self {
        let offset = byte_offset(content, line, column);
        let len = content[offset..].chars().next().map_or(0, char::len_utf8);

        RulesDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, len).into(),
            message,
            help,
        }
    }
}

/// Convert a 1-based line and character column to a byte offset, clamped to
/// the content length.
fn byte_offset(content: &str, line: usize, column: usize) -> usize {
    let line_start: usize = content
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    let line_start = line_start.min(content.len());
    let column_offset: usize = content[line_start..]
        .chars()
        .take(column.saturating_sub(1))
        .map(char::len_utf8)
        .sum();
    line_start + column_offset
}
