//! CLI command implementations.

mod check;
mod detect;
mod inflect;

pub use check::{run_check, CheckArgs};
pub use detect::{run_detect, DetectArgs};
pub use inflect::{run_inflect, InflectArgs};
