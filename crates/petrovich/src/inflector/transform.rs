//! Modifier selection and application.

use crate::rules::{Edit, Modifier, Rule};
use crate::types::GrammaticalCase;

/// The modifier `rule` prescribes for `case`.
///
/// Nominative has no slot in a rule and always yields the identity modifier;
/// the other five cases index the rule's modifiers in canonical order.
pub fn resolve_modifier(case: GrammaticalCase, rule: &Rule) -> &Modifier {
    match case.modifier_index() {
        Some(index) => &rule.mods()[index],
        None => Modifier::identity(),
    }
}

/// Apply the edits of `modifier` to `word`, left to right.
///
/// `DeleteLast` drops the last character written so far and does nothing on
/// an empty buffer. `Append` pushes its character.
pub fn apply_modifier(word: &str, modifier: &Modifier) -> String {
    let mut result = word.to_string();
    for edit in modifier.edits() {
        match edit {
            Edit::DeleteLast => {
                result.pop();
            }
            Edit::Append(c) => result.push(*c),
        }
    }
    result
}
