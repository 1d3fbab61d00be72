//! Core data model: ranked dates, slice identifiers, and slice files.
//!
//! All dates are day-granular `chrono::NaiveDate` values. Slices are counted
//! from the Unix epoch (1970-01-01), which is epoch day 0.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{SliceError, SliceResult};

/// Textual date format accepted on input and used on output.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Number of days between 0001-01-01 (day 1 in chrono's CE count) and 1970-01-01.
const EPOCH_DAYS_FROM_CE: i64 = 719_163;

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(input: &str) -> SliceResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| SliceError::InvalidDate { input: input.to_string() })
}

/// Whole days since 1970-01-01; negative for earlier dates.
pub fn epoch_day(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) - EPOCH_DAYS_FROM_CE
}

/// Inverse of [`epoch_day`].
pub fn date_from_epoch_day(day: i64) -> SliceResult<NaiveDate> {
    day.checked_add(EPOCH_DAYS_FROM_CE)
        .and_then(|ce| i32::try_from(ce).ok())
        .and_then(NaiveDate::from_num_days_from_ce_opt)
        .ok_or_else(|| SliceError::out_of_range(format!("epoch day {day}")))
}

/// Identifier of a slice: `floor(epoch_day / days_per_slice)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SliceId(pub i64);

impl SliceId {
    pub fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for SliceId {
    fn from(value: i64) -> Self {
        SliceId(value)
    }
}

impl fmt::Display for SliceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated slice width in days. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct DaysPerSlice(u32);

impl DaysPerSlice {
    /// Width used when the caller passes nothing (or zero).
    pub const DEFAULT: DaysPerSlice = DaysPerSlice(30);

    /// Build from an explicit positive width.
    pub fn new(days: i64) -> SliceResult<Self> {
        if days <= 0 {
            return Err(SliceError::invalid(
                "daysPerSlice",
                days,
                "must be a positive number of days",
            ));
        }
        u32::try_from(days)
            .map(DaysPerSlice)
            .map_err(|_| SliceError::invalid("daysPerSlice", days, "must fit in 32 bits"))
    }

    /// Normalize an optional caller argument: absent or zero falls back to
    /// `default`, negative values are rejected.
    pub fn resolve(arg: Option<i64>, default: DaysPerSlice) -> SliceResult<Self> {
        match arg {
            None | Some(0) => Ok(default),
            Some(days) => Self::new(days),
        }
    }

    /// Same as [`DaysPerSlice::resolve`] with [`DaysPerSlice::DEFAULT`].
    pub fn from_arg(arg: Option<i64>) -> SliceResult<Self> {
        Self::resolve(arg, Self::DEFAULT)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for DaysPerSlice {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for DaysPerSlice {
    type Error = SliceError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        DaysPerSlice::new(value)
    }
}

impl From<DaysPerSlice> for u32 {
    fn from(value: DaysPerSlice) -> Self {
        value.0
    }
}

impl fmt::Display for DaysPerSlice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Synthetic rank per calendar date, iterated in ascending date order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateRank {
    ranks: BTreeMap<NaiveDate, u32>,
}

impl DateRank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a rank for `date`, replacing any previous value.
    pub fn insert(&mut self, date: NaiveDate, rank: u32) -> Option<u32> {
        self.ranks.insert(date, rank)
    }

    pub fn get(&self, date: NaiveDate) -> Option<u32> {
        self.ranks.get(&date).copied()
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    pub fn clear(&mut self) {
        self.ranks.clear();
    }

    /// Iterate `(date, rank)` pairs in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, u32)> + '_ {
        self.ranks.iter().map(|(date, rank)| (*date, *rank))
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.ranks.keys().next().copied()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.ranks.keys().next_back().copied()
    }
}

impl FromIterator<(NaiveDate, u32)> for DateRank {
    fn from_iter<T: IntoIterator<Item = (NaiveDate, u32)>>(iter: T) -> Self {
        Self { ranks: iter.into_iter().collect() }
    }
}

/// Ranks grouped per slice, in the order they were appended.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SliceFile {
    files: BTreeMap<SliceId, Vec<u32>>,
}

impl SliceFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `rank` to the sequence for `slice`, creating it on first use.
    /// Returns `true` when the slice was newly created.
    pub fn append(&mut self, slice: SliceId, rank: u32) -> bool {
        match self.files.entry(slice) {
            btree_map::Entry::Occupied(mut entry) => {
                entry.get_mut().push(rank);
                false
            }
            btree_map::Entry::Vacant(entry) => {
                entry.insert(vec![rank]);
                true
            }
        }
    }

    pub fn get(&self, slice: SliceId) -> Option<&[u32]> {
        self.files.get(&slice).map(Vec::as_slice)
    }

    /// Number of distinct slices.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Total number of ranks across every slice.
    pub fn total_ranks(&self) -> usize {
        self.files.values().map(Vec::len).sum()
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    /// Iterate slices in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (SliceId, &[u32])> + '_ {
        self.files.iter().map(|(slice, ranks)| (*slice, ranks.as_slice()))
    }

    pub fn slice_ids(&self) -> Vec<SliceId> {
        self.files.keys().copied().collect()
    }
}

/// Dates covered by a slice. `end` is exclusive: it is the first day of the
/// following slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Length of the range in days.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start.format(DATE_FORMAT), self.end.format(DATE_FORMAT))
    }
}
