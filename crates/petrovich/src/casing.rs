//! Lowercasing shared by rule construction and word matching.

use icu_casemap::CaseMapper;
use icu_locale_core::LanguageIdentifier;
use icu_locale_core::langid;

const RUSSIAN: LanguageIdentifier = langid!("ru");

/// Lowercase `text` with Russian casing rules.
///
/// Rule test strings and the words matched against them both pass through
/// here, so the two sides of a comparison always agree.
pub(crate) fn to_lower(text: &str) -> String {
    CaseMapper::new().lowercase_to_string(text, &RUSSIAN).to_string()
}

#[cfg(test)]
mod tests {
    use super::to_lower;

    #[test]
    fn lowercases_cyrillic() {
        assert_eq!(to_lower("ИВАНОВИЧ"), "иванович");
        assert_eq!(to_lower("Пётр"), "пётр");
    }

    #[test]
    fn leaves_lowercase_untouched() {
        assert_eq!(to_lower("сергеевна"), "сергеевна");
        assert_eq!(to_lower(""), "");
    }
}
