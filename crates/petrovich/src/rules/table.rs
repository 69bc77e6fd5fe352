use serde::{Deserialize, Serialize};

use super::Rule;
use crate::types::NamePartKind;

/// Rules for one name part kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    #[serde(default)]
    exceptions: Vec<Rule>,
    #[serde(default)]
    suffixes: Vec<Rule>,
}

impl RuleSet {
    /// Create a rule set from ordered exception and suffix lists.
    pub fn new(exceptions: Vec<Rule>, suffixes: Vec<Rule>) -> Self {
        Self {
            exceptions,
            suffixes,
        }
    }

    /// Whole-word rules, checked before suffixes.
    pub fn exceptions(&self) -> &[Rule] {
        &self.exceptions
    }

    /// Suffix rules.
    pub fn suffixes(&self) -> &[Rule] {
        &self.suffixes
    }

    /// Total number of rules.
    pub fn len(&self) -> usize {
        self.exceptions.len() + self.suffixes.len()
    }

    /// Whether the set holds no rules.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Rule sets for last names, first names and middle names.
///
/// The serialized form uses the keys `lastname`, `firstname` and
/// `middlename`; any of them may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTable {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    lastname: Option<RuleSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    firstname: Option<RuleSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    middlename: Option<RuleSet>,
}

impl RuleTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a table from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the table to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Returns the table with the rule set for `kind` replaced.
    pub fn with(mut self, kind: NamePartKind, rules: RuleSet) -> Self {
        *self.slot(kind) = Some(rules);
        self
    }

    /// Get the rule set for a kind.
    pub fn get(&self, kind: NamePartKind) -> Option<&RuleSet> {
        match kind {
            NamePartKind::Last => self.lastname.as_ref(),
            NamePartKind::First => self.firstname.as_ref(),
            NamePartKind::Middle => self.middlename.as_ref(),
        }
    }

    /// Kinds that have a rule set, with their sets.
    pub fn iter(&self) -> impl Iterator<Item = (NamePartKind, &RuleSet)> {
        NamePartKind::ALL
            .into_iter()
            .filter_map(|kind| self.get(kind).map(|rules| (kind, rules)))
    }

    /// Total number of rules across all kinds.
    pub fn rule_count(&self) -> usize {
        self.iter().map(|(_, rules)| rules.len()).sum()
    }

    fn slot(&mut self, kind: NamePartKind) -> &mut Option<RuleSet> {
        match kind {
            NamePartKind::Last => &mut self.lastname,
            NamePartKind::First => &mut self.firstname,
            NamePartKind::Middle => &mut self.middlename,
        }
    }
}
