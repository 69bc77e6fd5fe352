//! Gender detection from the patronymic.

use crate::casing::to_lower;
use crate::types::{Gender, NameParts};

/// Detect the probable gender of a person from their middle name.
///
/// Patronymics ending in "ич" are male and those ending in "на" are female.
/// Anything else, including a missing or empty middle name, is
/// `Androgynous`. Last and first names are not consulted.
pub fn detect_gender(parts: &NameParts) -> Gender {
    parts
        .middle_name
        .as_deref()
        .map_or(Gender::Androgynous, detect_gender_of)
}

/// Detect gender from a middle name alone.
pub fn detect_gender_of(middle_name: &str) -> Gender {
    let middle_name = to_lower(middle_name);
    if middle_name.ends_with("ич") {
        Gender::Male
    } else if middle_name.ends_with("на") {
        Gender::Female
    } else {
        Gender::Androgynous
    }
}
