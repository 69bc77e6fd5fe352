//! Parser for the compact rule table format.
//!
//! ```text
//! // Last names
//! lastname {
//!     exceptions {
//!         androgynous :first_word = "бонч", "абдул" => ".", ".", ".", ".", ".";
//!     }
//!     suffixes {
//!         female = "ова", "ева" => "-ой", "-ой", "-у", "-ой", "-ой";
//!     }
//! }
//! ```
//!
//! Each rule is a gender, optional `:tag` requirements, the test strings and
//! the five modifiers for genitive through prepositional.

mod error;
mod file;

pub use error::ParseError;
pub use file::parse_rules;
