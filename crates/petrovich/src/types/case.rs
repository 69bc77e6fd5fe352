use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::inflector::{InflectError, compute_suggestions};

/// One of the six Russian grammatical cases.
///
/// Nominative is the dictionary form of a name and is never looked up in a
/// rule's modifier list. The other five cases map, in declaration order, to
/// the five modifiers every rule carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrammaticalCase {
    Nominative,
    Genitive,
    Dative,
    Accusative,
    Instrumental,
    Prepositional,
}

impl GrammaticalCase {
    /// All cases in their conventional order.
    pub const ALL: [GrammaticalCase; 6] = [
        GrammaticalCase::Nominative,
        GrammaticalCase::Genitive,
        GrammaticalCase::Dative,
        GrammaticalCase::Accusative,
        GrammaticalCase::Instrumental,
        GrammaticalCase::Prepositional,
    ];

    /// Full lowercase English name, e.g. `"genitive"`.
    pub fn as_str(self) -> &'static str {
        match self {
            GrammaticalCase::Nominative => "nominative",
            GrammaticalCase::Genitive => "genitive",
            GrammaticalCase::Dative => "dative",
            GrammaticalCase::Accusative => "accusative",
            GrammaticalCase::Instrumental => "instrumental",
            GrammaticalCase::Prepositional => "prepositional",
        }
    }

    /// Short name, e.g. `"gen"`.
    pub fn abbreviation(self) -> &'static str {
        match self {
            GrammaticalCase::Nominative => "nom",
            GrammaticalCase::Genitive => "gen",
            GrammaticalCase::Dative => "dat",
            GrammaticalCase::Accusative => "acc",
            GrammaticalCase::Instrumental => "ins",
            GrammaticalCase::Prepositional => "prep",
        }
    }

    /// Position of this case in a rule's modifier list.
    ///
    /// Returns `None` for nominative, which is always the identity.
    pub fn modifier_index(self) -> Option<usize> {
        match self {
            GrammaticalCase::Nominative => None,
            GrammaticalCase::Genitive => Some(0),
            GrammaticalCase::Dative => Some(1),
            GrammaticalCase::Accusative => Some(2),
            GrammaticalCase::Instrumental => Some(3),
            GrammaticalCase::Prepositional => Some(4),
        }
    }
}

impl Display for GrammaticalCase {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Parses full names (`"genitive"`) and abbreviations (`"gen"`),
/// ignoring ASCII case.
impl FromStr for GrammaticalCase {
    type Err = InflectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        GrammaticalCase::ALL
            .into_iter()
            .find(|case| case.as_str() == normalized || case.abbreviation() == normalized)
            .ok_or_else(|| {
                let names = GrammaticalCase::ALL.map(GrammaticalCase::as_str);
                InflectError::InvalidCase {
                    value: s.to_string(),
                    suggestions: compute_suggestions(&normalized, &names),
                }
            })
    }
}
