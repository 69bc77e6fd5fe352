use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use bon::Builder;
use serde::{Deserialize, Serialize};

use super::Gender;
use crate::inflector::{InflectError, compute_suggestions, detect_gender};

/// Which part of a full name a word is.
///
/// Each kind has its own rule set in a [`RuleTable`](crate::RuleTable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NamePartKind {
    #[serde(rename = "lastname")]
    Last,
    #[serde(rename = "firstname")]
    First,
    #[serde(rename = "middlename")]
    Middle,
}

impl NamePartKind {
    /// All kinds, in the order they appear in a full name.
    pub const ALL: [NamePartKind; 3] = [
        NamePartKind::Last,
        NamePartKind::First,
        NamePartKind::Middle,
    ];

    /// Key of this kind in a rule table.
    pub fn as_str(self) -> &'static str {
        match self {
            NamePartKind::Last => "lastname",
            NamePartKind::First => "firstname",
            NamePartKind::Middle => "middlename",
        }
    }
}

impl Display for NamePartKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Parses rule table keys (`"lastname"`) and the short forms `"last"`,
/// `"first"`, `"middle"` and `"patronymic"`.
impl FromStr for NamePartKind {
    type Err = InflectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "lastname" | "last" => Ok(NamePartKind::Last),
            "firstname" | "first" => Ok(NamePartKind::First),
            "middlename" | "middle" | "patronymic" => Ok(NamePartKind::Middle),
            _ => {
                let names = NamePartKind::ALL.map(NamePartKind::as_str);
                Err(InflectError::InvalidKind {
                    value: s.to_string(),
                    suggestions: compute_suggestions(&normalized, &names),
                })
            }
        }
    }
}

/// The parts of a person's full name, any of which may be missing.
///
/// A `NameParts` is an immutable value: inflecting it produces a new record.
///
/// # Example
///
/// ```
/// use petrovich::{Gender, NameParts};
///
/// let name = NameParts::builder()
///     .last_name("Пушкин")
///     .first_name("Александр")
///     .middle_name("Сергеевич")
///     .build();
///
/// assert_eq!(name.gender_or_detected(), Gender::Male);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder, Serialize, Deserialize)]
pub struct NameParts {
    #[builder(into)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[builder(into)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Middle name (patronymic). The only field gender is detected from.
    #[builder(into)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,

    /// Explicit gender. When absent it is detected from the middle name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
}

impl NameParts {
    /// A record holding only the given part.
    pub fn only(kind: NamePartKind, name: impl Into<String>) -> Self {
        Self::default().with(kind, name)
    }

    /// Get a part by kind.
    pub fn get(&self, kind: NamePartKind) -> Option<&str> {
        match kind {
            NamePartKind::Last => self.last_name.as_deref(),
            NamePartKind::First => self.first_name.as_deref(),
            NamePartKind::Middle => self.middle_name.as_deref(),
        }
    }

    /// Returns a copy with the part of the given kind replaced.
    pub fn with(mut self, kind: NamePartKind, name: impl Into<String>) -> Self {
        let slot = match kind {
            NamePartKind::Last => &mut self.last_name,
            NamePartKind::First => &mut self.first_name,
            NamePartKind::Middle => &mut self.middle_name,
        };
        *slot = Some(name.into());
        self
    }

    /// The explicit gender, or the one detected from the middle name.
    pub fn gender_or_detected(&self) -> Gender {
        self.gender.unwrap_or_else(|| detect_gender(self))
    }

    /// Whether no part is present.
    pub fn is_empty(&self) -> bool {
        NamePartKind::ALL.iter().all(|kind| self.get(*kind).is_none())
    }
}

/// Present parts joined by spaces in last, first, middle order.
impl Display for NameParts {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let parts: Vec<&str> = NamePartKind::ALL
            .iter()
            .filter_map(|kind| self.get(*kind))
            .collect();
        f.write_str(&parts.join(" "))
    }
}
