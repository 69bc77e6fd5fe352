//! Rule lookup.

use crate::casing::to_lower;
use crate::rules::{Rule, RuleSet};
use crate::types::{ContextTags, Gender};

/// How a rule's test strings are compared with a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// The whole word must equal a test string.
    WholeWord,
    /// The word must end with a test string.
    Suffix,
}

impl MatchMode {
    /// Whether lowercased `word` matches lowercased `test`.
    pub fn matches(self, word: &str, test: &str) -> bool {
        match self {
            MatchMode::WholeWord => word == test,
            MatchMode::Suffix => word.ends_with(test),
        }
    }
}

/// Find the rule that inflects `word`.
///
/// Exceptions are searched first by whole word, then suffix rules by word
/// ending. Within each list the first rule whose tags are satisfied, whose
/// gender admits `gender`, and which has a matching test string wins.
/// Comparison ignores letter case.
pub fn find_rule<'r>(
    word: &str,
    gender: Gender,
    rules: &'r RuleSet,
    tags: &ContextTags,
) -> Option<&'r Rule> {
    let word = to_lower(word);
    find_in(&word, gender, rules.exceptions(), MatchMode::WholeWord, tags)
        .or_else(|| find_in(&word, gender, rules.suffixes(), MatchMode::Suffix, tags))
}

fn find_in<'r>(
    word: &str,
    gender: Gender,
    rules: &'r [Rule],
    mode: MatchMode,
    tags: &ContextTags,
) -> Option<&'r Rule> {
    rules.iter().find(|rule| {
        rule.applies_to(gender, tags) && rule.test().iter().any(|test| mode.matches(word, test))
    })
}
