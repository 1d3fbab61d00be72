use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use window_date::commands::{execute, ShellCommand};
use window_date::shell::run_shell;
use window_date::{build_session, load_config_or_default, parse_date_arg};

/// Exploratory shell for bucketing date-ranked data into day slices.
///
/// This CLI is a thin wrapper around `window-date-core`. With no command it
/// starts an interactive shell; any shell command can also be run once
/// directly, e.g. `window-date get-slices 1970-01-01 1970-03-02 30`.
#[derive(Parser, Debug)]
#[command(
    name = "window-date",
    version,
    about = "Generate synthetic date ranks and group them into day slices",
    long_about = None
)]
struct Cli {
    /// Config file (JSON, or YAML with a .yaml/.yml extension).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Seed for rank generation. Overrides the config seed.
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Treat this date (YYYY-MM-DD) as today instead of reading the clock.
    #[arg(long, global = true, value_parser = parse_date_arg)]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the interactive shell (the default when no command is given).
    Shell,

    #[command(flatten)]
    Run(ShellCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config_or_default(cli.config.as_deref())?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
    debug!(?config, "loaded config");

    let mut session = build_session(config, cli.seed, cli.today);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Command::Shell) {
        Command::Shell => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            run_shell(&mut session, stdin.lock(), &mut out, interactive)?;
        }
        Command::Run(command) => {
            execute(&mut session, command, &mut out)?;
        }
    }

    Ok(())
}
