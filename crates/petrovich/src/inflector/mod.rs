//! Rule matching and application.
//!
//! The pipeline for a single word is [`find_rule`] → [`resolve_modifier`] →
//! [`apply_modifier`]. [`inflect`] runs it over each hyphen-separated segment
//! of a name. All of these are pure functions over borrowed rule data.
//! [`Petrovich`] is the entry point that owns a loaded [`RuleTable`] and
//! picks the rule set and default gender for each call.
//!
//! [`RuleTable`]: crate::RuleTable

mod detect;
mod error;
mod inflect;
mod matcher;
mod petrovich;
mod transform;

pub use detect::{detect_gender, detect_gender_of};
pub use error::{InflectError, LoadError, compute_suggestions};
pub use inflect::inflect;
pub use matcher::{MatchMode, find_rule};
pub use petrovich::{Petrovich, RulesFormat};
pub use transform::{apply_modifier, resolve_modifier};
