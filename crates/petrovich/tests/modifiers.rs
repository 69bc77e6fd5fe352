//! Tests for modifier parsing, selection and application.

use petrovich::{Edit, Gender, GrammaticalCase, Modifier, Rule, apply_modifier, resolve_modifier};

fn feminine_rule() -> Rule {
    Rule::new(
        Gender::Androgynous,
        ["а"],
        ["-и", "-е", "-у", "-ой", "-е"],
        vec![],
    )
    .unwrap()
}

#[test]
fn notation_parses_into_edits() {
    let modifier = Modifier::from("--ого");
    assert_eq!(
        modifier.edits(),
        [
            Edit::DeleteLast,
            Edit::DeleteLast,
            Edit::Append('о'),
            Edit::Append('г'),
            Edit::Append('о'),
        ]
    );
}

#[test]
fn dot_is_identity() {
    let modifier = Modifier::from(".");
    assert!(modifier.is_identity());
    assert_eq!(modifier.apply("Дюма"), "Дюма");
    assert_eq!(modifier.to_string(), ".");
}

#[test]
fn delete_then_append() {
    assert_eq!(apply_modifier("Фекла", &Modifier::from("-и")), "Фекли");
}

#[test]
fn multiple_deletions() {
    assert_eq!(apply_modifier("Пётр", &Modifier::from("---етра")), "Петра");
}

#[test]
fn append_only() {
    assert_eq!(apply_modifier("Иванов", &Modifier::from("ым")), "Ивановым");
}

#[test]
fn interleaved_edits() {
    let modifier = Modifier::new(vec![
        Edit::DeleteLast,
        Edit::Append('ь'),
        Edit::DeleteLast,
        Edit::Append('и'),
    ]);
    assert_eq!(apply_modifier("Любовь", &modifier), "Любови");
}

#[test]
fn deleting_past_empty_word_is_a_no_op() {
    assert_eq!(apply_modifier("я", &Modifier::from("---ей")), "ей");
    assert_eq!(apply_modifier("", &Modifier::from("-")), "");
}

#[test]
fn display_round_trips_notation() {
    for notation in ["-я", "--ого", "ом", "---етра"] {
        assert_eq!(Modifier::from(notation).to_string(), notation);
    }
}

#[test]
fn nominative_resolves_to_identity() {
    let rule = feminine_rule();
    assert!(resolve_modifier(GrammaticalCase::Nominative, &rule).is_identity());
}

#[test]
fn cases_resolve_positionally() {
    let rule = feminine_rule();
    let resolved: Vec<String> = GrammaticalCase::ALL[1..]
        .iter()
        .map(|case| resolve_modifier(*case, &rule).to_string())
        .collect();
    assert_eq!(resolved, ["-и", "-е", "-у", "-ой", "-е"]);
}

#[test]
fn genitive_of_fekla() {
    let rule = feminine_rule();
    let modifier = resolve_modifier(GrammaticalCase::Genitive, &rule);
    assert_eq!(apply_modifier("Фекла", modifier), "Фекли");
}
