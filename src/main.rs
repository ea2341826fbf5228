use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use foldcmp::config::ReportSettings;
use foldcmp::error::CmpResult;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with report settings; flags given on the command line win
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compare two metric tables and write the text report
    Compare(cmd::compare::CompareArgs),
    /// Compare two metric tables and split the report by size group
    Group(cmd::group::GroupArgs),
    /// Print an existing report as a table
    Show(cmd::show::ShowArgs),
}

fn main() {
    // Raw matches are kept to tell explicit flags apart from defaults.
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let result = match &cli.command {
        Commands::Compare(args) => resolve_settings(
            cli.config.as_deref(),
            &args.settings,
            matches.subcommand_matches("compare"),
        )
        .and_then(|settings| cmd::compare::run(args, settings)),
        Commands::Group(args) => resolve_settings(
            cli.config.as_deref(),
            &args.settings,
            matches.subcommand_matches("group"),
        )
        .and_then(|settings| cmd::group::run(args, settings)),
        Commands::Show(args) => cmd::show::run(args),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}

fn resolve_settings(
    config_path: Option<&str>,
    cli_settings: &ReportSettings,
    sub_matches: Option<&ArgMatches>,
) -> CmpResult<ReportSettings> {
    let Some(path) = config_path else {
        cli_settings.validate()?;
        return Ok(cli_settings.clone());
    };

    info!("⚖️  Loading settings from: {}", path);
    let mut settings = ReportSettings::load_from_file(path)?;
    if let Some(m) = sub_matches {
        settings.merge_from_cli(cli_settings, m);
    }
    settings.validate()?;
    Ok(settings)
}
