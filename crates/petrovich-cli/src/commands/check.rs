//! Implementation of the `petrovich check` command.

use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use clap::Args;
use miette::{IntoDiagnostic, Report, Result};
use owo_colors::OwoColorize;
use petrovich::parser::parse_rules;
use petrovich::{RuleTable, RulesFormat};
use serde::Serialize;

use crate::output::table::format_rule_counts;
use crate::output::RulesDiagnostic;

/// Arguments for the check command.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Rule files to check (.rules or .json)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct FileJson {
    file: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    kinds: Vec<KindJson>,
}

#[derive(Debug, Serialize)]
struct KindJson {
    kind: String,
    exceptions: usize,
    suffixes: usize,
}

enum Outcome {
    Valid(RuleTable),
    Invalid(RulesDiagnostic),
    Unreadable(String),
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<i32> {
    let mut code = exitcode::OK;
    let mut reports: Vec<FileJson> = Vec::with_capacity(args.files.len());

    for path in &args.files {
        let outcome = check_file(path);
        code = match (&outcome, code) {
            (Outcome::Unreadable(_), _) => exitcode::NOINPUT,
            (Outcome::Invalid(_), exitcode::OK) => exitcode::DATAERR,
            (_, code) => code,
        };

        if args.json {
            reports.push(file_json(path, &outcome));
            continue;
        }

        match outcome {
            Outcome::Valid(table) => {
                println!("{} {}", path.display(), "ok".green());
                println!("{}", format_rule_counts(&table));
            }
            Outcome::Invalid(diagnostic) => {
                eprintln!("{:?}", Report::new(diagnostic));
            }
            Outcome::Unreadable(message) => {
                eprintln!("{} {}: {}", path.display(), "error".red(), message);
            }
        }
    }

    if args.json {
        let json_output = serde_json::to_string_pretty(&reports).into_diagnostic()?;
        println!("{}", json_output);
    }

    Ok(code)
}

fn check_file(path: &Path) -> Outcome {
    tracing::debug!(path = %path.display(), "checking rule file");
    let content = match read_to_string(path) {
        Ok(content) => content,
        Err(e) => return Outcome::Unreadable(e.to_string()),
    };

    match RulesFormat::from_path(path) {
        RulesFormat::Text => match parse_rules(&content) {
            Ok(table) => Outcome::Valid(table),
            Err(e) => Outcome::Invalid(RulesDiagnostic::from_parse_error(path, &content, &e)),
        },
        RulesFormat::Json => match RuleTable::from_json(&content) {
            Ok(table) => Outcome::Valid(table),
            Err(e) => Outcome::Invalid(RulesDiagnostic::from_json_error(path, &content, &e)),
        },
    }
}

fn file_json(path: &Path, outcome: &Outcome) -> FileJson {
    let (error, kinds) = match outcome {
        Outcome::Valid(table) => (
            None,
            table
                .iter()
                .map(|(kind, set)| KindJson {
                    kind: kind.to_string(),
                    exceptions: set.exceptions().len(),
                    suffixes: set.suffixes().len(),
                })
                .collect(),
        ),
        Outcome::Invalid(diagnostic) => (Some(diagnostic.to_string()), Vec::new()),
        Outcome::Unreadable(message) => (Some(message.clone()), Vec::new()),
    };

    FileJson {
        file: path.display().to_string(),
        valid: error.is_none(),
        error,
        kinds,
    }
}
