use crate::reports;
use clap::Args;
use foldcmp::compare::parse_report;
use foldcmp::error::CmpResult;
use std::fs;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// A report written by `compare` or `group`
    pub report: PathBuf,

    /// Only list structures whose identifier contains this text
    #[arg(short, long)]
    pub filter: Option<String>,
}

pub fn run(args: &ShowArgs) -> CmpResult<()> {
    let text = fs::read_to_string(&args.report)?;
    let comparison = parse_report(&text)?;

    reports::print_records(&comparison, args.filter.as_deref());
    reports::print_summary(&comparison);
    Ok(())
}
