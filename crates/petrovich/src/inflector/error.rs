//! Error types for inflection and rule loading.

use std::path::PathBuf;

use strsim::levenshtein;
use thiserror::Error;

use crate::types::NamePartKind;

/// Errors that occur when inflecting a name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InflectError {
    /// No rule table has been supplied.
    #[error("rules not loaded: supply a rule table before inflecting names")]
    RulesNotLoaded,

    /// The loaded rule table has no rule set for this kind.
    #[error("rule table has no rules for '{kind}'")]
    MissingRuleSet { kind: NamePartKind },

    /// Unrecognized grammatical case name.
    #[error("unknown grammatical case '{value}'{}", format_suggestions(suggestions))]
    InvalidCase {
        value: String,
        suggestions: Vec<String>,
    },

    /// Unrecognized gender name.
    #[error("unknown gender '{value}'{}", format_suggestions(suggestions))]
    InvalidGender {
        value: String,
        suggestions: Vec<String>,
    },

    /// Unrecognized name part kind.
    #[error("unknown name part '{value}'{}", format_suggestions(suggestions))]
    InvalidKind {
        value: String,
        suggestions: Vec<String>,
    },
}

/// Errors that occur while loading a rule table.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading a rule file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Syntax or rule error in a text rule file.
    #[error("{path}:{line}:{column}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// Malformed JSON rule file.
    #[error("{path}: invalid JSON rules: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Attempted to reload rules that were not loaded from a file.
    #[error("cannot reload rules: they were not loaded from a file")]
    NoPathForReload,
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}

/// Compute typo suggestions for `name` from `available` names.
///
/// - Only names within Levenshtein distance 1 (short input) or 2 are kept
/// - At most 3 suggestions, closest first
pub fn compute_suggestions(name: &str, available: &[&str]) -> Vec<String> {
    let max_distance = if name.chars().count() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, &str)> = available
        .iter()
        .filter_map(|candidate| {
            let dist = levenshtein(name, candidate);
            if dist <= max_distance && dist > 0 {
                Some((dist, *candidate))
            } else {
                None
            }
        })
        .collect();

    suggestions.sort_by_key(|(dist, _)| *dist);
    suggestions
        .into_iter()
        .take(3)
        .map(|(_, s)| s.to_string())
        .collect()
}
