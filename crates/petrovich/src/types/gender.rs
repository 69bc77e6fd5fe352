use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::inflector::{InflectError, compute_suggestions};

/// Grammatical gender of a person.
///
/// On a rule, `Androgynous` is a wildcard that applies to words of any gender.
/// On a query it means the gender is unknown, so only wildcard rules apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Androgynous,
}

impl Gender {
    /// All genders, in declaration order.
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Androgynous];

    /// The lowercase name used in rule tables.
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Androgynous => "androgynous",
        }
    }

    /// Whether a rule declared for this gender applies to a word of the
    /// `requested` gender.
    pub fn admits(self, requested: Gender) -> bool {
        self == Gender::Androgynous || self == requested
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = InflectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Gender::ALL
            .into_iter()
            .find(|gender| gender.as_str() == normalized)
            .ok_or_else(|| {
                let names = Gender::ALL.map(Gender::as_str);
                InflectError::InvalidGender {
                    value: s.to_string(),
                    suggestions: compute_suggestions(&normalized, &names),
                }
            })
    }
}
