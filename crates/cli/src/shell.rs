//! Line-oriented interactive shell.
//!
//! Each input line is split on whitespace and parsed with the same clap
//! command table used for one-shot invocations, so `help`, `--help` and the
//! short aliases (`g0`, `p0`, `gs`, ...) behave identically in both modes.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, warn};
use window_date_core::session::Session;

use crate::commands::{execute, Flow, ShellCommand};

const PROMPT: &str = "window-date> ";

#[derive(Parser, Debug)]
#[command(name = "window-date", no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

/// Parse one shell line. Blank lines and `#` comments yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<ShellCommand>, clap::Error> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.first() {
        None => Ok(None),
        Some(first) if first.starts_with('#') => Ok(None),
        Some(_) => ShellLine::try_parse_from(tokens).map(|parsed| Some(parsed.command)),
    }
}

/// Read commands from `input` until EOF or `exit`.
///
/// Command failures and parse errors are reported on `out` and the loop
/// continues; only I/O errors on the shell streams end it early.
pub fn run_shell<R: BufRead>(
    session: &mut Session,
    input: R,
    out: &mut dyn Write,
    interactive: bool,
) -> Result<()> {
    if interactive {
        writeln!(
            out,
            "window-date v{}. Type 'help' for commands, 'exit' to quit.",
            window_date_core::version()
        )?;
    }

    let mut lines = input.lines();
    loop {
        if interactive {
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }

        let Some(line) = lines.next() else {
            if interactive {
                writeln!(out)?;
            }
            break;
        };
        let line = line.context("Failed to read shell input")?;

        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                write!(out, "{}", err.render())?;
                continue;
            }
        };

        debug!(?command, "dispatching shell command");
        match execute(session, command, out) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(err) => {
                warn!(error = %err, "shell command failed");
                writeln!(out, "Error: {err:#}")?;
            }
        }
    }

    Ok(())
}
