use super::write_output;
use crate::reports;
use clap::Args;
use foldcmp::compare::Reporter;
use foldcmp::config::ReportSettings;
use foldcmp::error::CmpResult;
use foldcmp::table::load_table;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    #[command(flatten)]
    pub settings: ReportSettings,

    /// Metric table of method A (`<id> <value>` per line)
    #[arg(short = 'a', long)]
    pub table_a: PathBuf,

    /// Metric table of method B
    #[arg(short = 'b', long)]
    pub table_b: PathBuf,

    /// Report destination; the report goes to stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write the comparison as JSON
    #[arg(long)]
    pub json: Option<PathBuf>,
}

pub fn run(args: &CompareArgs, settings: ReportSettings) -> CmpResult<()> {
    let reporter = Reporter::new(settings)?;
    let s = reporter.settings();

    info!("📂 Loading {} table: {}", s.method_a, args.table_a.display());
    let table_a = load_table(&args.table_a)?;
    info!("📂 Loading {} table: {}", s.method_b, args.table_b.display());
    let table_b = load_table(&args.table_b)?;

    let comparison = reporter.compare(&table_a, &table_b)?;
    let text = comparison.render();

    if let Some(path) = &args.json {
        write_output(path, &serde_json::to_string_pretty(&comparison)?)?;
    }

    match &args.output {
        Some(path) => {
            write_output(path, &text)?;
            reports::print_summary(&comparison);
        }
        None => print!("{}", text),
    }

    Ok(())
}
