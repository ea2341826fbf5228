use super::write_output;
use crate::reports;
use clap::Args;
use foldcmp::compare::Reporter;
use foldcmp::config::ReportSettings;
use foldcmp::error::CmpResult;
use foldcmp::groups::{GroupIndex, SizeGroup};
use foldcmp::table::load_table;
use std::path::PathBuf;
use strum::IntoEnumIterator;
use tracing::warn;

#[derive(Args, Debug, Clone)]
pub struct GroupArgs {
    #[command(flatten)]
    pub settings: ReportSettings,

    #[arg(short = 'a', long)]
    pub table_a: PathBuf,

    #[arg(short = 'b', long)]
    pub table_b: PathBuf,

    /// Group index file with `[Group S]`, `[Group M]` and `[Group L]` sections
    #[arg(short, long)]
    pub index: PathBuf,

    /// Receives `all/`, `S/`, `M/` and `L/` report directories
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,
}

pub fn run(args: &GroupArgs, settings: ReportSettings) -> CmpResult<()> {
    let reporter = Reporter::new(settings)?;
    let file_name = reporter.settings().metric.report_file_name();

    let index = GroupIndex::load(&args.index)?;
    let table_a = load_table(&args.table_a)?;
    let table_b = load_table(&args.table_b)?;

    let comparison = reporter.compare(&table_a, &table_b)?;
    write_output(
        &args.out_dir.join("all").join(&file_name),
        &comparison.render(),
    )?;

    let groups = comparison.split_by_group(&index);
    for group in SizeGroup::iter() {
        match groups.get(&group) {
            Some(c) => write_output(
                &args.out_dir.join(group.to_string()).join(&file_name),
                &c.render(),
            )?,
            None => warn!("⚠️  Group {} has no compared structures; skipped.", group),
        }
    }

    reports::print_group_summary(&comparison, &groups);
    Ok(())
}
