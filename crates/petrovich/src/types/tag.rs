use std::borrow::Borrow;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// Name of a context flag a rule requires of the word it inflects.
///
/// The inflector sets `firstWord` on the leading segment of a hyphenated
/// name such as "Бонч-Бруевич". Rule tables in the wild also spell it
/// `first_word`; both spellings are set together so either one matches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    /// The leading segment of a name with two or more hyphenated segments.
    pub const FIRST_WORD: &'static str = "firstWord";

    /// Snake case spelling of [`FIRST_WORD`](Self::FIRST_WORD).
    pub const FIRST_WORD_ALIAS: &'static str = "first_word";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The `firstWord` tag.
    pub fn first_word() -> Self {
        Self::new(Self::FIRST_WORD)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for Tag {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for Tag {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl From<&str> for Tag {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Tag {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}
