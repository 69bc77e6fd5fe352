use serde::{Deserialize, Serialize};

use super::{Modifier, RuleError};
use crate::casing::to_lower;
use crate::inflector::resolve_modifier;
use crate::types::{ContextTags, Gender, GrammaticalCase, Tag};

/// One inflection pattern.
///
/// A rule names the surface forms it matches (`test`), the gender it applies
/// to, the context tags it requires, and one modifier for each of the five
/// non-nominative cases in the order genitive, dative, accusative,
/// instrumental, prepositional.
///
/// Rules are validated on construction and never change afterwards.
///
/// # Example
///
/// ```
/// use petrovich::{Gender, GrammaticalCase, Rule};
///
/// let rule = Rule::new(
///     Gender::Male,
///     ["ич"],
///     ["а", "у", "а", "ем", "е"],
///     vec![],
/// )
/// .unwrap();
///
/// assert_eq!(rule.modifier(GrammaticalCase::Instrumental).to_string(), "ем");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RuleData", into = "RuleData")]
pub struct Rule {
    gender: Gender,
    test: Vec<String>,
    mods: [Modifier; Rule::MODIFIER_COUNT],
    tags: Vec<Tag>,
}

impl Rule {
    /// Number of modifiers a rule carries, one per non-nominative case.
    pub const MODIFIER_COUNT: usize = 5;

    /// Create a rule.
    ///
    /// Test strings are lowercased. Fails if `test` is empty or `mods` does
    /// not hold exactly [`Rule::MODIFIER_COUNT`] modifiers.
    pub fn new<T, M>(
        gender: Gender,
        test: impl IntoIterator<Item = T>,
        mods: impl IntoIterator<Item = M>,
        tags: Vec<Tag>,
    ) -> Result<Self, RuleError>
    where
        T: AsRef<str>,
        M: Into<Modifier>,
    {
        let test: Vec<String> = test.into_iter().map(|s| to_lower(s.as_ref())).collect();
        if test.is_empty() {
            return Err(RuleError::EmptyTest);
        }

        let mods: Vec<Modifier> = mods.into_iter().map(Into::into).collect();
        let got = mods.len();
        let mods = <[Modifier; Rule::MODIFIER_COUNT]>::try_from(mods).map_err(|_| {
            RuleError::ModifierCount {
                expected: Rule::MODIFIER_COUNT,
                got,
            }
        })?;

        Ok(Self {
            gender,
            test,
            mods,
            tags,
        })
    }

    /// Gender this rule applies to; `Androgynous` applies to any gender.
    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// Lowercased surface forms, in match order.
    pub fn test(&self) -> &[String] {
        &self.test
    }

    /// Modifiers for genitive through prepositional.
    pub fn mods(&self) -> &[Modifier; Rule::MODIFIER_COUNT] {
        &self.mods
    }

    /// Tags that must all be set for this rule to apply.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Whether this rule may be tried for a word of `gender` in context
    /// `tags`.
    pub fn applies_to(&self, gender: Gender, tags: &ContextTags) -> bool {
        tags.allows(&self.tags) && self.gender.admits(gender)
    }

    /// The modifier for `case`. Same as [`resolve_modifier`].
    pub fn modifier(&self, case: GrammaticalCase) -> &Modifier {
        resolve_modifier(case, self)
    }
}

/// Serialized shape of a rule, as found in rule table files.
#[derive(Serialize, Deserialize)]
struct RuleData {
    gender: Gender,
    test: Vec<String>,
    mods: Vec<Modifier>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    tags: Vec<Tag>,
}

impl TryFrom<RuleData> for Rule {
    type Error = RuleError;

    fn try_from(data: RuleData) -> Result<Self, Self::Error> {
        Rule::new(data.gender, data.test, data.mods, data.tags)
    }
}

impl From<Rule> for RuleData {
    fn from(rule: Rule) -> Self {
        RuleData {
            gender: rule.gender,
            test: rule.test,
            mods: rule.mods.into(),
            tags: rule.tags,
        }
    }
}
