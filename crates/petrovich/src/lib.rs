//! Inflection of Russian personal names.
//!
//! Last names, first names and patronymics are declined across the six
//! grammatical cases by matching them against an ordered rule table of
//! exceptions and suffix rules. When the gender of a person is not known it
//! can be inferred from the patronymic.
//!
//! # Example
//!
//! ```
//! use petrovich::{Gender, GrammaticalCase, Petrovich, RulesFormat};
//!
//! let mut petrovich = Petrovich::new();
//! petrovich
//!     .load_rules_str(
//!         r#"
//!         middlename {
//!             suffixes {
//!                 male = "ич" => "а", "у", "а", "ем", "е";
//!                 female = "на" => "-ы", "-е", "-у", "-ой", "-е";
//!             }
//!         }
//!         "#,
//!         RulesFormat::Text,
//!     )
//!     .unwrap();
//!
//! let dative = petrovich
//!     .inflect_middle_name("Сергеевна", GrammaticalCase::Dative, None)
//!     .unwrap();
//! assert_eq!(dative, "Сергеевне");
//! assert_eq!(petrovich::detect_gender_of("Сергеевна"), Gender::Female);
//! ```

mod casing;
pub mod inflector;
pub mod parser;
pub mod rules;
pub mod types;

pub use inflector::{
    InflectError, LoadError, MatchMode, Petrovich, RulesFormat, apply_modifier,
    compute_suggestions, detect_gender, detect_gender_of, find_rule, inflect, resolve_modifier,
};
pub use rules::{Edit, Modifier, Rule, RuleError, RuleSet, RuleTable};
pub use types::{ContextTags, Gender, GrammaticalCase, NamePartKind, NameParts, Tag};
