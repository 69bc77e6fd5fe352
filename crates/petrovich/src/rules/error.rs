use thiserror::Error;

/// A rule that cannot be constructed from its parts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// The rule has no test strings and could never match.
    #[error("rule has no test strings")]
    EmptyTest,

    /// The rule does not carry one modifier per non-nominative case.
    #[error("rule must have exactly {expected} modifiers, got {got}")]
    ModifierCount { expected: usize, got: usize },
}
