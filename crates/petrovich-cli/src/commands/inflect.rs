//! Implementation of the `petrovich inflect` command.

use std::path::PathBuf;

use clap::Args;
use miette::{IntoDiagnostic, Result};
use owo_colors::OwoColorize;
use petrovich::{Gender, GrammaticalCase, LoadError, NameParts, Petrovich};
use serde::Serialize;

use crate::output::table::format_declension_table;

/// Arguments for the inflect command.
#[derive(Debug, Args)]
pub struct InflectArgs {
    /// Rule file (.rules or .json).
    #[arg(long, env = "PETROVICH_RULES")]
    pub rules: PathBuf,

    /// Last name (surname).
    #[arg(long)]
    pub last: Option<String>,

    /// First name.
    #[arg(long)]
    pub first: Option<String>,

    /// Middle name (patronymic).
    #[arg(long)]
    pub middle: Option<String>,

    /// Gender: male, female or androgynous. Detected from the middle name when omitted.
    #[arg(long)]
    pub gender: Option<Gender>,

    /// Target case. All six cases are printed when omitted.
    #[arg(long)]
    pub case: Option<GrammaticalCase>,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for one inflected form.
#[derive(Debug, Serialize)]
struct FormJson<'a> {
    case: GrammaticalCase,
    gender: Gender,
    name: String,
    parts: &'a NameParts,
}

/// Run the inflect command.
pub fn run_inflect(args: InflectArgs) -> Result<i32> {
    let name = NameParts {
        last_name: args.last,
        first_name: args.first,
        middle_name: args.middle,
        gender: args.gender,
    };
    if name.is_empty() {
        eprintln!("nothing to inflect: pass at least one of --last, --first or --middle");
        return Ok(exitcode::DATAERR);
    }

    let mut petrovich = Petrovich::new();
    if let Err(e) = petrovich.load_rules(&args.rules) {
        eprintln!("{}", e);
        return Ok(match e {
            LoadError::Io { .. } => exitcode::NOINPUT,
            _ => exitcode::DATAERR,
        });
    }

    let gender = name.gender_or_detected();
    let cases = args
        .case
        .map_or_else(|| GrammaticalCase::ALL.to_vec(), |case| vec![case]);

    let mut forms: Vec<(GrammaticalCase, NameParts)> = Vec::with_capacity(cases.len());
    for case in cases {
        match petrovich.inflect_name(&name, case) {
            Ok(parts) => forms.push((case, parts)),
            Err(e) => {
                eprintln!("{}", e);
                return Ok(exitcode::DATAERR);
            }
        }
    }

    if args.json {
        let json_data: Vec<FormJson<'_>> = forms
            .iter()
            .map(|(case, parts)| FormJson {
                case: *case,
                gender,
                name: parts.to_string(),
                parts,
            })
            .collect();

        let json_output = match json_data.as_slice() {
            [single] if args.case.is_some() => serde_json::to_string_pretty(single),
            all => serde_json::to_string_pretty(all),
        }
        .into_diagnostic()?;
        println!("{}", json_output);
    } else if args.case.is_some() {
        for (_, parts) in &forms {
            println!("{}", parts);
        }
    } else {
        println!("{} {}", "Gender:".dimmed(), gender);
        println!("{}", format_declension_table(&name, &forms));
    }

    Ok(exitcode::OK)
}
