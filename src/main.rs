mod commands;
mod context;
mod render;
mod utils;

use anyhow::Result;
use calgrid_core::seed::SeedKind;
use clap::{Parser, Subcommand};
use context::AppContext;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "calgrid")]
#[command(about = "Month calendar with a year sidebar and day panel. Events live for one session only")]
struct Cli {
    /// Config file (defaults to ~/.config/calgrid/config.toml)
    #[arg(long, global = true)]
    config: Option<String>,

    /// Initial events: year-plan, sample or empty
    #[arg(long, global = true)]
    seed: Option<SeedKind>,

    /// Treat this date as today (YYYY-MM-DD)
    #[arg(long, global = true)]
    today: Option<String>,

    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the month grid
    Month {
        /// Month to show (YYYY-MM), defaults to the current month
        month: Option<String>,

        /// Print grid cells as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the events of one day
    Day {
        /// Day to show (YYYY-MM-DD), defaults to today
        date: Option<String>,

        /// Print events as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show event counts per month
    Year {
        /// Year to show, defaults to the current year
        year: Option<i32>,
    },
    /// Browse and edit events interactively
    Shell,
    /// Print the effective configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = AppContext::build(cli.config.as_deref(), cli.seed, cli.today.as_deref())?;

    match cli.command {
        Commands::Month { month, json } => commands::month::run(&mut ctx, month.as_deref(), json),
        Commands::Day { date, json } => commands::day::run(&mut ctx, date.as_deref(), json),
        Commands::Year { year } => commands::year::run(&mut ctx, year),
        Commands::Shell => commands::shell::run(&mut ctx),
        Commands::Config => commands::config::run(&ctx),
    }
}

/// Logs go to stderr so rendered views on stdout stay clean. `RUST_LOG`
/// overrides the default level.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
