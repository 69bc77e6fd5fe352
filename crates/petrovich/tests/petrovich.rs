//! Integration tests for the `Petrovich` entry point.

use std::io::{Seek, Write};
use std::sync::Arc;
use std::thread;

use petrovich::parser::parse_rules;
use petrovich::{
    Gender, GrammaticalCase, InflectError, LoadError, NamePartKind, NameParts, Petrovich,
    RuleSet, RuleTable, RulesFormat,
};
use tempfile::{Builder, NamedTempFile};

const RULES: &str = include_str!("fixtures/ru.rules");
const RULES_JSON: &str = include_str!("fixtures/ru.json");

fn russian() -> Petrovich {
    let mut petrovich = Petrovich::new();
    petrovich.load_rules_str(RULES, RulesFormat::Text).unwrap();
    petrovich
}

// =========================================================================
// Missing Rules
// =========================================================================

#[test]
fn inflecting_without_rules_fails() {
    let petrovich = Petrovich::new();
    let err = petrovich
        .inflect_last_name("Иванов", GrammaticalCase::Genitive, Some(Gender::Male))
        .unwrap_err();
    assert_eq!(err, InflectError::RulesNotLoaded);
}

#[test]
fn inflect_name_without_rules_fails_even_for_empty_record() {
    let petrovich = Petrovich::new();
    let err = petrovich
        .inflect_name(&NameParts::default(), GrammaticalCase::Dative)
        .unwrap_err();
    assert_eq!(err, InflectError::RulesNotLoaded);
}

#[test]
fn missing_rule_set_is_reported_by_kind() {
    let table = RuleTable::new().with(NamePartKind::Middle, RuleSet::default());
    let petrovich = Petrovich::with_rules(table);
    let err = petrovich
        .inflect_first_name("Анна", GrammaticalCase::Genitive, None)
        .unwrap_err();
    assert_eq!(
        err,
        InflectError::MissingRuleSet {
            kind: NamePartKind::First
        }
    );
}

// =========================================================================
// Per-Kind Entry Points
// =========================================================================

#[test]
fn last_name_with_explicit_gender() {
    let petrovich = russian();
    let name = petrovich
        .inflect_last_name("Ахматова", GrammaticalCase::Dative, Some(Gender::Female))
        .unwrap();
    assert_eq!(name, "Ахматовой");
}

#[test]
fn last_name_without_gender_uses_wildcard_rules_only() {
    let petrovich = russian();
    let name = petrovich
        .inflect_last_name("Иванов", GrammaticalCase::Genitive, None)
        .unwrap();
    assert_eq!(name, "Иванов");
}

#[test]
fn middle_name_gender_is_detected_from_itself() {
    let petrovich = russian();
    assert_eq!(
        petrovich
            .inflect_middle_name("Сергеевич", GrammaticalCase::Instrumental, None)
            .unwrap(),
        "Сергеевичем"
    );
    assert_eq!(
        petrovich
            .inflect_patronymic("Сергеевна", GrammaticalCase::Accusative, None)
            .unwrap(),
        "Сергеевну"
    );
}

#[test]
fn inflect_part_matches_named_wrappers() {
    let petrovich = russian();
    let via_part = petrovich
        .inflect_part(
            NamePartKind::First,
            "Дмитрий",
            GrammaticalCase::Prepositional,
            Some(Gender::Male),
        )
        .unwrap();
    let via_wrapper = petrovich
        .inflect_first_name("Дмитрий", GrammaticalCase::Prepositional, Some(Gender::Male))
        .unwrap();
    assert_eq!(via_part, "Дмитрии");
    assert_eq!(via_part, via_wrapper);
}

// =========================================================================
// Full Names
// =========================================================================

#[test]
fn inflect_name_uses_detected_gender() {
    let petrovich = russian();
    let name = NameParts::builder()
        .last_name("Ахматова")
        .first_name("Анна")
        .middle_name("Андреевна")
        .build();

    let dative = petrovich
        .inflect_name(&name, GrammaticalCase::Dative)
        .unwrap();
    assert_eq!(dative.to_string(), "Ахматовой Анне Андреевне");
    assert_eq!(dative.gender, Some(Gender::Female));
}

#[test]
fn inflect_name_uses_explicit_gender() {
    let petrovich = russian();
    let name = NameParts::builder()
        .last_name("Толстой")
        .first_name("Лев")
        .gender(Gender::Male)
        .build();

    let genitive = petrovich
        .inflect_name(&name, GrammaticalCase::Genitive)
        .unwrap();
    assert_eq!(genitive.last_name.as_deref(), Some("Толстого"));
    assert_eq!(genitive.first_name.as_deref(), Some("Льва"));
    assert_eq!(genitive.middle_name, None);
}

#[test]
fn inflect_name_nominative_returns_same_parts() {
    let petrovich = russian();
    let name = NameParts::builder()
        .last_name("Пушкин")
        .first_name("Александр")
        .middle_name("Сергеевич")
        .build();

    let nominative = petrovich
        .inflect_name(&name, GrammaticalCase::Nominative)
        .unwrap();
    assert_eq!(nominative.to_string(), name.to_string());
}

#[test]
fn declension_lists_all_cases() {
    let petrovich = russian();
    let forms = petrovich
        .declension(NamePartKind::First, "Илья", Some(Gender::Male))
        .unwrap();
    assert_eq!(forms, ["Илья", "Ильи", "Илье", "Илью", "Ильей", "Илье"]);
}

// =========================================================================
// Loading
// =========================================================================

#[test]
fn load_rules_str_counts_rules() {
    let mut petrovich = Petrovich::new();
    let count = petrovich.load_rules_str(RULES, RulesFormat::Text).unwrap();
    assert_eq!(count, 64);
}

#[test]
fn json_and_text_rules_are_equivalent() {
    let mut from_json = Petrovich::new();
    from_json.load_rules_str(RULES_JSON, RulesFormat::Json).unwrap();
    let from_text = russian();

    assert_eq!(from_json.rules().unwrap(), from_text.rules().unwrap());
}

#[test]
fn failed_load_keeps_previous_rules() {
    let mut petrovich = russian();
    let result = petrovich.load_rules_str("lastname {", RulesFormat::Text);
    assert!(result.is_err());

    let name = petrovich
        .inflect_last_name("Иванов", GrammaticalCase::Genitive, Some(Gender::Male))
        .unwrap();
    assert_eq!(name, "Иванова");
}

#[test]
fn loading_replaces_whole_table() {
    let mut petrovich = russian();
    petrovich
        .load_rules_str(
            r#"middlename { suffixes { male = "ич" => "а", "у", "а", "ем", "е"; } }"#,
            RulesFormat::Text,
        )
        .unwrap();

    let err = petrovich
        .inflect_last_name("Иванов", GrammaticalCase::Genitive, Some(Gender::Male))
        .unwrap_err();
    assert_eq!(
        err,
        InflectError::MissingRuleSet {
            kind: NamePartKind::Last
        }
    );
}

#[test]
fn load_rules_from_json_file() {
    let mut file = Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(RULES_JSON.as_bytes()).unwrap();

    let mut petrovich = Petrovich::new();
    let count = petrovich.load_rules(file.path()).unwrap();
    assert_eq!(count, 64);
}

#[test]
fn load_rules_missing_file() {
    let mut petrovich = Petrovich::new();
    let err = petrovich
        .load_rules("/nonexistent/path/ru.rules")
        .unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}

#[test]
fn reload_rules_picks_up_changes() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"firstname {{ suffixes {{ male = "р" => "а", "у", "а", "ом", "е"; }} }}"#
    )
    .unwrap();

    let mut petrovich = Petrovich::new();
    petrovich.load_rules(file.path()).unwrap();
    assert_eq!(
        petrovich
            .inflect_first_name("Пётр", GrammaticalCase::Genitive, Some(Gender::Male))
            .unwrap(),
        "Пётра"
    );

    file.as_file_mut().set_len(0).unwrap();
    file.rewind().unwrap();
    file.write_all(RULES.as_bytes()).unwrap();

    let count = petrovich.reload_rules().unwrap();
    assert_eq!(count, 64);
    assert_eq!(
        petrovich
            .inflect_first_name("Пётр", GrammaticalCase::Genitive, Some(Gender::Male))
            .unwrap(),
        "Петра"
    );
}

#[test]
fn reload_without_file_fails() {
    let mut petrovich = russian();
    let err = petrovich.reload_rules().unwrap_err();
    assert!(matches!(err, LoadError::NoPathForReload));
}

#[test]
fn format_follows_extension() {
    use std::path::Path;

    assert_eq!(
        RulesFormat::from_path(Path::new("ru.JSON")),
        RulesFormat::Json
    );
    assert_eq!(
        RulesFormat::from_path(Path::new("ru.rules")),
        RulesFormat::Text
    );
    assert_eq!(RulesFormat::from_path(Path::new("rules")), RulesFormat::Text);
}

// =========================================================================
// Sharing
// =========================================================================

#[test]
fn builder_accepts_table() {
    let table = parse_rules(RULES).unwrap();
    let petrovich = Petrovich::builder().rules(table).build();
    assert_eq!(petrovich.rules().unwrap().rule_count(), 64);
}

#[test]
fn concurrent_inflection_shares_rules() {
    let petrovich = Arc::new(russian());

    let handles: Vec<_> = ["Иванов", "Петров", "Сидоров"]
        .into_iter()
        .map(|name| {
            let petrovich = Arc::clone(&petrovich);
            thread::spawn(move || {
                petrovich
                    .inflect_last_name(name, GrammaticalCase::Genitive, Some(Gender::Male))
                    .unwrap()
            })
        })
        .collect();

    let results: Vec<String> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();
    assert_eq!(results, ["Иванова", "Петрова", "Сидорова"]);
}
