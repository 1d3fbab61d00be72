//! Synthetic rank generation.
//!
//! Builds a [`DateRank`] covering the `days` days that end on `today`,
//! drawing a uniform rank for every day and randomly dropping some days to
//! simulate gaps in a real data feed.

use chrono::{Days, NaiveDate};
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{SliceError, SliceResult};
use crate::model::{DateRank, DATE_FORMAT};

/// Validated parameters for [`generate_ranks`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankParams {
    /// Percentage of days to drop, `0..=100`.
    pub percentage_dropped: u8,
    /// Largest (worst) rank that can be drawn. Ranks are `1..=lowest_rank`.
    pub lowest_rank: u32,
    /// Number of days to generate, ending today.
    pub days: u32,
}

impl RankParams {
    pub const DEFAULT_PERCENTAGE_DROPPED: u8 = 5;
    pub const DEFAULT_LOWEST_RANK: u32 = 200;
    pub const DEFAULT_DAYS: u32 = 20;

    /// Validate raw caller arguments.
    pub fn new(percentage_dropped: i64, lowest_rank: i64, days: i64) -> SliceResult<Self> {
        let percentage_dropped = u8::try_from(percentage_dropped)
            .ok()
            .filter(|p| *p <= 100)
            .ok_or_else(|| {
                SliceError::invalid(
                    "percentageDropped",
                    percentage_dropped,
                    "must be between 0 and 100",
                )
            })?;
        if lowest_rank <= 0 {
            return Err(SliceError::invalid("lowestRank", lowest_rank, "must be positive"));
        }
        let lowest_rank = u32::try_from(lowest_rank)
            .map_err(|_| SliceError::invalid("lowestRank", lowest_rank, "must fit in 32 bits"))?;
        if days < 0 {
            return Err(SliceError::invalid("days", days, "must not be negative"));
        }
        let days = u32::try_from(days)
            .map_err(|_| SliceError::invalid("days", days, "must fit in 32 bits"))?;

        Ok(Self { percentage_dropped, lowest_rank, days })
    }

    /// Fill in any missing argument from `self`, then validate.
    pub fn merge(
        &self,
        percentage_dropped: Option<i64>,
        lowest_rank: Option<i64>,
        days: Option<i64>,
    ) -> SliceResult<Self> {
        Self::new(
            percentage_dropped.unwrap_or_else(|| i64::from(self.percentage_dropped)),
            lowest_rank.unwrap_or_else(|| i64::from(self.lowest_rank)),
            days.unwrap_or_else(|| i64::from(self.days)),
        )
    }
}

impl Default for RankParams {
    fn default() -> Self {
        Self {
            percentage_dropped: Self::DEFAULT_PERCENTAGE_DROPPED,
            lowest_rank: Self::DEFAULT_LOWEST_RANK,
            days: Self::DEFAULT_DAYS,
        }
    }
}

/// Generate ranks for the `params.days` days ending on `today` (inclusive).
///
/// For each day a rank is drawn from `1..=lowest_rank`, then an independent
/// draw from `0..100` decides whether the day is kept: it is kept only when
/// the draw is strictly greater than `percentage_dropped`.
pub fn generate_ranks<R: Rng + ?Sized>(
    params: &RankParams,
    today: NaiveDate,
    rng: &mut R,
) -> SliceResult<DateRank> {
    debug!(
        percentage_dropped = params.percentage_dropped,
        lowest_rank = params.lowest_rank,
        days = params.days,
        "generating ranks"
    );

    let mut ranks = DateRank::new();
    if params.days == 0 {
        return Ok(ranks);
    }

    // Starts one day before the window; advanced before each use.
    let mut cursor = today
        .checked_sub_days(Days::new(u64::from(params.days)))
        .ok_or_else(|| SliceError::out_of_range(format!("{} days before {today}", params.days)))?;

    let rank_dist = Uniform::new_inclusive(1, params.lowest_rank);
    let drop_dist = Uniform::new(0u8, 100);

    for _ in 0..params.days {
        let rank = rank_dist.sample(rng);

        cursor = cursor
            .succ_opt()
            .ok_or_else(|| SliceError::out_of_range(format!("day after {cursor}")))?;

        if drop_dist.sample(rng) > params.percentage_dropped {
            debug!(rank, date = %cursor.format(DATE_FORMAT), "added generated rank");
            ranks.insert(cursor, rank);
        } else {
            debug!(rank, date = %cursor.format(DATE_FORMAT), "dropped generated rank");
        }
    }

    Ok(ranks)
}
