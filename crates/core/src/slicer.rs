//! Slice arithmetic and bucketing.
//!
//! A slice of width `w` covers the epoch days `[k * w, (k + 1) * w)` and is
//! identified by `k`. Division is floored, so days before 1970-01-01 land in
//! negative slices rather than sharing slice 0 with the first days after it.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{SliceError, SliceResult};
use crate::model::{
    date_from_epoch_day, epoch_day, DateRange, DateRank, DaysPerSlice, SliceFile, SliceId,
};

/// Slice containing `date` for slices `days_per_slice` days wide.
pub fn slice_offset(date: NaiveDate, days_per_slice: DaysPerSlice) -> SliceId {
    SliceId(epoch_day(date).div_euclid(i64::from(days_per_slice.get())))
}

/// Append every rank in `ranks` to its slice in `file`, in ascending date order.
pub fn bucket_ranks(ranks: &DateRank, days_per_slice: DaysPerSlice, file: &mut SliceFile) {
    for (date, rank) in ranks.iter() {
        let slice = slice_offset(date, days_per_slice);
        if file.append(slice, rank) {
            debug!(%slice, "file for slice not found, created it");
        }
        debug!(rank, %slice, %date, "added rank to slice file");
    }
}

/// Group `ranks` into a fresh [`SliceFile`].
pub fn slice_ranks(ranks: &DateRank, days_per_slice: DaysPerSlice) -> SliceFile {
    let mut file = SliceFile::new();
    bucket_ranks(ranks, days_per_slice, &mut file);
    file
}

/// Dates covered by `slice`. The end date is exclusive.
pub fn date_range(slice: SliceId, days_per_slice: DaysPerSlice) -> SliceResult<DateRange> {
    let width = i64::from(days_per_slice.get());
    let start_day = slice
        .value()
        .checked_mul(width)
        .ok_or_else(|| SliceError::out_of_range(format!("slice {slice} x {width} days")))?;
    let end_day = start_day
        .checked_add(width)
        .ok_or_else(|| SliceError::out_of_range(format!("slice {slice} end")))?;

    let range =
        DateRange { start: date_from_epoch_day(start_day)?, end: date_from_epoch_day(end_day)? };
    debug!(%slice, start = %range.start, end = %range.end, "computed slice date range");
    Ok(range)
}

/// Every slice id from the slice containing `start` through the slice
/// containing `end`, ascending. Empty when `start` is after `end`.
pub fn slices_between(
    start: NaiveDate,
    end: NaiveDate,
    days_per_slice: DaysPerSlice,
) -> Vec<SliceId> {
    let first = slice_offset(start, days_per_slice).value();
    let last = slice_offset(end, days_per_slice).value();
    let slices: Vec<SliceId> = (first..=last).map(SliceId).collect();
    debug!(first, last, count = slices.len(), "computed slices between dates");
    slices
}
