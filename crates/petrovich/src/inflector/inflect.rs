//! Whole-name inflection.

use super::{apply_modifier, find_rule, resolve_modifier};
use crate::rules::RuleSet;
use crate::types::{ContextTags, Gender, GrammaticalCase};

/// Inflect `name` into `case` using `rules`.
///
/// The name is split on `-` and every segment is inflected on its own; the
/// first segment of a compound name carries the `firstWord` tag. Segments
/// no rule matches are returned unchanged.
///
/// # Example
///
/// ```
/// use petrovich::{Gender, GrammaticalCase, Rule, RuleSet, inflect};
///
/// let rules = RuleSet::new(
///     vec![],
///     vec![Rule::new(Gender::Male, ["н", "в"], ["а", "у", "а", "ым", "е"], vec![]).unwrap()],
/// );
///
/// let name = inflect("Салтыков-Щедрин", GrammaticalCase::Instrumental, Gender::Male, &rules);
/// assert_eq!(name, "Салтыковым-Щедриным");
/// ```
pub fn inflect(name: &str, case: GrammaticalCase, gender: Gender, rules: &RuleSet) -> String {
    let segments: Vec<&str> = name.split('-').collect();
    let count = segments.len();

    segments
        .iter()
        .enumerate()
        .map(|(index, segment)| {
            let tags = ContextTags::for_segment(index, count);
            match find_rule(segment, gender, rules, &tags) {
                Some(rule) => apply_modifier(segment, resolve_modifier(case, rule)),
                None => (*segment).to_string(),
            }
        })
        .collect::<Vec<String>>()
        .join("-")
}
