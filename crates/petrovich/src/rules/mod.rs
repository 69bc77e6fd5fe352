//! Immutable inflection rule data.
//!
//! A [`RuleTable`] holds one [`RuleSet`] per name part kind. Each rule set is
//! two ordered lists of [`Rule`]s: whole-word exceptions, checked first, and
//! suffix rules. Within a list the first matching rule wins, so more specific
//! rules must come before more general ones.

mod error;
mod modifier;
mod rule;
mod table;

pub use error::RuleError;
pub use modifier::{Edit, Modifier};
pub use rule::Rule;
pub use table::{RuleSet, RuleTable};
