//! Command table shared by one-shot invocations and the interactive shell.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Subcommand;
use window_date_core::session::Session;

use crate::parse_date_arg;

pub mod ranks;
pub mod slices;

pub use ranks::*;
pub use slices::*;

/// Every operation the shell understands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Generate synthetic ranks for the days ending today, replacing any previous ranks.
    ///
    /// Omitted arguments fall back to the configured defaults
    /// (5% dropped, lowest rank 200, 20 days).
    #[command(visible_aliases = ["gr", "g0"])]
    GenerateRanks {
        /// Percentage of days to drop (0-100).
        #[arg(allow_negative_numbers = true)]
        percentage_dropped: Option<i64>,

        /// Largest rank that can be drawn; ranks are 1..=LOWEST_RANK.
        #[arg(allow_negative_numbers = true)]
        lowest_rank: Option<i64>,

        /// Number of days to generate, ending today.
        #[arg(allow_negative_numbers = true)]
        days: Option<i64>,
    },

    /// Group the generated ranks into slices, generating default ranks first if needed.
    #[command(visible_aliases = ["ps", "p0"])]
    PerformSlicing {
        /// Slice width in days. Omitted or 0 uses the configured default (30).
        #[arg(allow_negative_numbers = true)]
        days_per_slice: Option<i64>,

        /// Append to the existing slice file instead of rebuilding it.
        #[arg(long, default_value_t = false)]
        append: bool,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Show the dates covered by a slice (end date is exclusive).
    #[command(visible_alias = "gdr")]
    GetDateRange {
        /// Slice id.
        #[arg(allow_negative_numbers = true)]
        slice: i64,

        /// Slice width in days. Omitted or 0 uses the configured default (30).
        #[arg(allow_negative_numbers = true)]
        days_per_slice: Option<i64>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// List every slice id between two dates (inclusive).
    #[command(visible_alias = "gs")]
    GetSlices {
        /// First date, YYYY-MM-DD.
        #[arg(value_parser = parse_date_arg)]
        start_date: NaiveDate,

        /// Last date, YYYY-MM-DD.
        #[arg(value_parser = parse_date_arg)]
        end_date: NaiveDate,

        /// Slice width in days. Omitted or 0 uses the configured default (30).
        #[arg(allow_negative_numbers = true)]
        days_per_slice: Option<i64>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Show the currently generated ranks.
    #[command(visible_alias = "sr")]
    ShowRanks {
        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Show the current slice file.
    #[command(visible_alias = "ss")]
    ShowSlices {
        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Empty the slice file, keeping the generated ranks.
    #[command(visible_alias = "cs")]
    ClearSlices,

    /// Drop both the generated ranks and the slice file.
    Reset,

    /// Leave the shell.
    #[command(visible_aliases = ["quit", "q"])]
    Exit,
}

/// Whether the shell should keep reading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Run one command against `session`, writing its output to `out`.
pub fn execute(session: &mut Session, command: ShellCommand, out: &mut dyn Write) -> Result<Flow> {
    match command {
        ShellCommand::GenerateRanks { percentage_dropped, lowest_rank, days } => {
            generate_ranks_command(session, percentage_dropped, lowest_rank, days, out)?
        }
        ShellCommand::PerformSlicing { days_per_slice, append, json } => {
            perform_slicing_command(session, days_per_slice, append, json, out)?
        }
        ShellCommand::GetDateRange { slice, days_per_slice, json } => {
            get_date_range_command(session, slice, days_per_slice, json, out)?
        }
        ShellCommand::GetSlices { start_date, end_date, days_per_slice, json } => {
            get_slices_command(session, start_date, end_date, days_per_slice, json, out)?
        }
        ShellCommand::ShowRanks { json } => show_ranks_command(session, json, out)?,
        ShellCommand::ShowSlices { json } => show_slices_command(session, json, out)?,
        ShellCommand::ClearSlices => clear_slices_command(session, out)?,
        ShellCommand::Reset => reset_command(session, out)?,
        ShellCommand::Exit => return Ok(Flow::Exit),
    }

    Ok(Flow::Continue)
}
