//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use petrovich::{GrammaticalCase, NamePartKind, NameParts, RuleTable};

/// Format one row per case with a column per present name part.
pub fn format_declension_table(
    original: &NameParts,
    forms: &[(GrammaticalCase, NameParts)],
) -> Table {
    let kinds: Vec<NamePartKind> = NamePartKind::ALL
        .into_iter()
        .filter(|kind| original.get(*kind).is_some())
        .collect();

    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec!["Case".to_string()];
    header.extend(kinds.iter().map(|kind| column_title(*kind).to_string()));
    table.set_header(header);

    for (case, parts) in forms {
        let mut row = vec![case.to_string()];
        row.extend(
            kinds
                .iter()
                .map(|kind| parts.get(*kind).unwrap_or_default().to_string()),
        );
        table.add_row(row);
    }

    table
}

/// Format exception and suffix counts per name part kind.
pub fn format_rule_counts(rules: &RuleTable) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Kind", "Exceptions", "Suffixes"]);

    for (kind, set) in rules.iter() {
        table.add_row(vec![
            kind.to_string(),
            set.exceptions().len().to_string(),
            set.suffixes().len().to_string(),
        ]);
    }

    table
}

fn column_title(kind: NamePartKind) -> &'static str {
    match kind {
        NamePartKind::Last => "Last name",
        NamePartKind::First => "First name",
        NamePartKind::Middle => "Middle name",
    }
}
