mod case;
mod context_tags;
mod gender;
mod name_parts;
mod tag;

pub use case::GrammaticalCase;
pub use context_tags::ContextTags;
pub use gender::Gender;
pub use name_parts::{NamePartKind, NameParts};
pub use tag::Tag;
