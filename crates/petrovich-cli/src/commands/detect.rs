//! Implementation of the `petrovich detect` command.

use clap::Args;
use miette::{IntoDiagnostic, Result};
use petrovich::{detect_gender, Gender, NameParts};
use serde::Serialize;

/// Arguments for the detect command.
#[derive(Debug, Args)]
pub struct DetectArgs {
    /// Last name (surname).
    #[arg(long)]
    pub last: Option<String>,

    /// First name.
    #[arg(long)]
    pub first: Option<String>,

    /// Middle name (patronymic). Only this part decides the gender.
    #[arg(long)]
    pub middle: String,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct DetectJson {
    gender: Gender,
}

/// Run the detect command.
pub fn run_detect(args: DetectArgs) -> Result<i32> {
    let name = NameParts::builder()
        .maybe_last_name(args.last)
        .maybe_first_name(args.first)
        .middle_name(args.middle)
        .build();
    let gender = detect_gender(&name);

    if args.json {
        let json_output = serde_json::to_string_pretty(&DetectJson { gender }).into_diagnostic()?;
        println!("{}", json_output);
    } else {
        println!("{}", gender);
    }

    Ok(exitcode::OK)
}
