use std::io::Write;

use anyhow::{Context, Result};
use window_date_core::model::DATE_FORMAT;
use window_date_core::session::Session;

/// Generate ranks, falling back to the configured defaults for omitted arguments.
pub fn generate_ranks_command(
    session: &mut Session,
    percentage_dropped: Option<i64>,
    lowest_rank: Option<i64>,
    days: Option<i64>,
    out: &mut dyn Write,
) -> Result<()> {
    let params = session
        .config()
        .rank_defaults
        .merge(percentage_dropped, lowest_rank, days)
        .context("Invalid generate-ranks arguments")?;
    let today = session.today();
    let ranks = session.generate_ranks(&params).context("Failed to generate ranks")?;

    let kept = ranks.len();
    let dropped = params.days as usize - kept;
    writeln!(
        out,
        "Generated {kept} ranks over {} days ending {} ({dropped} dropped)",
        params.days,
        today.format(DATE_FORMAT)
    )?;

    Ok(())
}

/// Print the generated ranks, one date per line.
pub fn show_ranks_command(session: &Session, json: bool, out: &mut dyn Write) -> Result<()> {
    let Some(ranks) = session.date_rank() else {
        if json {
            writeln!(out, "null")?;
        } else {
            writeln!(out, "No ranks generated yet")?;
        }
        return Ok(());
    };

    if json {
        let serialized =
            serde_json::to_string_pretty(ranks).context("Failed to serialize ranks to JSON")?;
        writeln!(out, "{}", serialized)?;
        return Ok(());
    }

    writeln!(out, "Ranks ({}):", ranks.len())?;
    if ranks.is_empty() {
        writeln!(out, "  (none)")?;
        return Ok(());
    }
    for (date, rank) in ranks.iter() {
        writeln!(out, "  {} {}", date.format(DATE_FORMAT), rank)?;
    }

    Ok(())
}
