//! Tests for error types and error message formatting.

use std::io::{self, ErrorKind};
use std::path::PathBuf;

use petrovich::{
    Gender, GrammaticalCase, InflectError, LoadError, NamePartKind, Petrovich, RulesFormat,
    compute_suggestions,
};

#[test]
fn invalid_case_is_rejected() {
    let err = "ablative".parse::<GrammaticalCase>().unwrap_err();
    assert!(matches!(err, InflectError::InvalidCase { ref value, .. } if value == "ablative"));
}

#[test]
fn invalid_case_suggests_close_names() {
    let err = "genitiv".parse::<GrammaticalCase>().unwrap_err();
    match err {
        InflectError::InvalidCase { suggestions, .. } => {
            assert_eq!(suggestions, vec!["genitive"]);
        }
        other => panic!("expected InvalidCase, got {other:?}"),
    }
}

#[test]
fn invalid_case_message_includes_suggestion() {
    let err = "dativ".parse::<GrammaticalCase>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "unknown grammatical case 'dativ', did you mean: dative?"
    );
}

#[test]
fn invalid_case_without_suggestions() {
    let err = "".parse::<GrammaticalCase>().unwrap_err();
    assert_eq!(err.to_string(), "unknown grammatical case ''");
}

#[test]
fn invalid_gender_is_rejected() {
    let err = "mail".parse::<Gender>().unwrap_err();
    match err {
        InflectError::InvalidGender { suggestions, .. } => {
            assert_eq!(suggestions, vec!["male"]);
        }
        other => panic!("expected InvalidGender, got {other:?}"),
    }
}

#[test]
fn invalid_kind_is_rejected() {
    let err = "lastnme".parse::<NamePartKind>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "unknown name part 'lastnme', did you mean: lastname?"
    );
}

#[test]
fn rules_not_loaded_message() {
    assert_eq!(
        InflectError::RulesNotLoaded.to_string(),
        "rules not loaded: supply a rule table before inflecting names"
    );
}

#[test]
fn missing_rule_set_message() {
    let err = InflectError::MissingRuleSet {
        kind: NamePartKind::Middle,
    };
    assert_eq!(err.to_string(), "rule table has no rules for 'middlename'");
}

#[test]
fn compute_suggestions_orders_by_distance() {
    let available = ["dative", "native", "genitive"];
    let suggestions = compute_suggestions("dativ", &available);
    assert_eq!(suggestions[0], "dative");
    assert!(suggestions.contains(&"native".to_string()));
    assert!(!suggestions.contains(&"genitive".to_string()));
}

#[test]
fn compute_suggestions_skips_exact_match() {
    assert!(compute_suggestions("male", &["male"]).is_empty());
}

#[test]
fn load_error_io_displays_path() {
    let err = LoadError::Io {
        path: PathBuf::from("/path/to/ru.rules"),
        source: io::Error::new(ErrorKind::NotFound, "file not found"),
    };
    let msg = err.to_string();
    assert!(msg.contains("/path/to/ru.rules"));
    assert!(msg.contains("file not found"));
}

#[test]
fn load_error_parse_displays_location() {
    let mut petrovich = Petrovich::new();
    let err = petrovich
        .load_rules_str("lastname {\n  suffixes {\n    male = \"в\" => \"а\";\n  }\n}", RulesFormat::Text)
        .unwrap_err();

    let msg = err.to_string();
    assert!(msg.starts_with("<string>:3:5:"), "message: {msg}");
    assert!(msg.contains("exactly 5 modifiers"));
}

#[test]
fn load_error_json_is_reported() {
    let mut petrovich = Petrovich::new();
    let err = petrovich
        .load_rules_str(r#"{"lastname": {"suffixes": [{"gender": "male"}]}}"#, RulesFormat::Json)
        .unwrap_err();
    assert!(matches!(err, LoadError::Json { .. }));
}
