use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::inflector::apply_modifier;

/// A single edit applied to the end of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edit {
    /// Remove the last character.
    DeleteLast,
    /// Append a character.
    Append(char),
}

/// An edit script turning a nominative form into another case's form.
///
/// Rule tables write modifiers as short strings: `-` removes the last
/// character, `.` marks the identity modifier, and any other character is
/// appended. `"--ого"` therefore drops two characters and appends "ого".
///
/// # Example
///
/// ```
/// use petrovich::Modifier;
///
/// let genitive = Modifier::from("-и");
/// assert_eq!(genitive.apply("Фекла"), "Фекли");
/// assert_eq!(Modifier::from(".").apply("Фекла"), "Фекла");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Modifier {
    edits: Vec<Edit>,
}

static IDENTITY: Modifier = Modifier { edits: Vec::new() };

impl Modifier {
    /// Create a modifier from a sequence of edits.
    pub fn new(edits: Vec<Edit>) -> Self {
        Self { edits }
    }

    /// The modifier that leaves a word unchanged.
    pub fn identity() -> &'static Modifier {
        &IDENTITY
    }

    /// Whether this modifier changes nothing.
    pub fn is_identity(&self) -> bool {
        self.edits.is_empty()
    }

    /// The edits, in application order.
    pub fn edits(&self) -> &[Edit] {
        &self.edits
    }

    /// Apply the edits to `word`. Same as [`apply_modifier`].
    pub fn apply(&self, word: &str) -> String {
        apply_modifier(word, self)
    }
}

impl From<&str> for Modifier {
    fn from(notation: &str) -> Self {
        let edits = notation
            .chars()
            .filter(|c| *c != '.')
            .map(|c| match c {
                '-' => Edit::DeleteLast,
                other => Edit::Append(other),
            })
            .collect();
        Self { edits }
    }
}

impl From<String> for Modifier {
    fn from(notation: String) -> Self {
        Self::from(notation.as_str())
    }
}

impl From<Modifier> for String {
    fn from(modifier: Modifier) -> Self {
        modifier.to_string()
    }
}

/// Writes the rule table notation; the identity modifier is written `.`.
impl Display for Modifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.is_identity() {
            return f.write_str(".");
        }
        for edit in &self.edits {
            match edit {
                Edit::DeleteLast => f.write_str("-")?,
                Edit::Append(c) => write!(f, "{c}")?,
            }
        }
        Ok(())
    }
}
