use std::io::Write;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;
use window_date_core::model::{DaysPerSlice, SliceFile, SliceId, DATE_FORMAT};
use window_date_core::session::{Session, SliceMode};

/// JSON shape for `get-date-range`.
#[derive(Debug, Serialize)]
struct DateRangeReport {
    slice: SliceId,
    days_per_slice: DaysPerSlice,
    start: NaiveDate,
    end: NaiveDate,
}

/// Comma-separated values, the format the shell prints lists in.
pub fn join_values<T: ToString>(values: &[T]) -> String {
    values.iter().map(ToString::to_string).collect::<Vec<_>>().join(",")
}

/// Write a slice file as `File [<slice>]:<rank>,<rank>,...` lines.
pub fn write_slice_file(file: &SliceFile, json: bool, out: &mut dyn Write) -> Result<()> {
    if json {
        let serialized =
            serde_json::to_string_pretty(file).context("Failed to serialize slices to JSON")?;
        writeln!(out, "{}", serialized)?;
        return Ok(());
    }

    if file.is_empty() {
        writeln!(out, "No slices")?;
        return Ok(());
    }
    for (slice, ranks) in file.iter() {
        writeln!(out, "File [{}]:{}", slice, join_values(ranks))?;
    }

    Ok(())
}

/// Slice the generated ranks and print the resulting slice file.
pub fn perform_slicing_command(
    session: &mut Session,
    days_per_slice: Option<i64>,
    append: bool,
    json: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let mode = if append { SliceMode::Append } else { SliceMode::Replace };
    let file = session.perform_slicing(days_per_slice, mode).context("Failed to slice ranks")?;
    write_slice_file(file, json, out)
}

/// Print the date range covered by a slice.
pub fn get_date_range_command(
    session: &Session,
    slice: i64,
    days_per_slice: Option<i64>,
    json: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let slice = SliceId(slice);
    let range = session
        .date_range(slice, days_per_slice)
        .with_context(|| format!("Failed to compute date range for slice {slice}"))?;

    if json {
        let days_per_slice =
            DaysPerSlice::resolve(days_per_slice, session.default_days_per_slice())?;
        let report = DateRangeReport { slice, days_per_slice, start: range.start, end: range.end };
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    writeln!(out, "Start date [{}]", range.start.format(DATE_FORMAT))?;
    writeln!(out, "End date [{}]", range.end.format(DATE_FORMAT))?;

    Ok(())
}

/// Print every slice id between two dates.
pub fn get_slices_command(
    session: &Session,
    start_date: NaiveDate,
    end_date: NaiveDate,
    days_per_slice: Option<i64>,
    json: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let slices = session
        .slices_between(start_date, end_date, days_per_slice)
        .context("Failed to compute slices")?;

    if json {
        writeln!(out, "{}", serde_json::to_string(&slices)?)?;
    } else if slices.is_empty() {
        writeln!(out, "No slices (start date is after end date)")?;
    } else {
        writeln!(out, "{}", join_values(&slices))?;
    }

    Ok(())
}

pub fn show_slices_command(session: &Session, json: bool, out: &mut dyn Write) -> Result<()> {
    write_slice_file(session.slice_file(), json, out)
}

pub fn clear_slices_command(session: &mut Session, out: &mut dyn Write) -> Result<()> {
    session.clear_slices();
    writeln!(out, "Cleared slices")?;
    Ok(())
}

pub fn reset_command(session: &mut Session, out: &mut dyn Write) -> Result<()> {
    session.reset();
    writeln!(out, "Cleared ranks and slices")?;
    Ok(())
}
