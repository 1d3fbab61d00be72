//! Caller-owned session state.
//!
//! A [`Session`] holds the generated [`DateRank`] (if any), the current
//! [`SliceFile`], the RNG used for generation and the clock used for "today".
//! Frontends create one per shell and call its methods with parsed arguments.

use chrono::{Local, NaiveDate};
use rand::SeedableRng;
use rand_pcg::Pcg64;
use tracing::{debug, info, Level};

use crate::config::ShellConfig;
use crate::error::SliceResult;
use crate::model::{DateRange, DateRank, DaysPerSlice, SliceFile, SliceId};
use crate::ranks::{generate_ranks, RankParams};
use crate::slicer;

/// How [`Session::perform_slicing`] treats an existing slice file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SliceMode {
    /// Clear the slice file first, so repeated slicing gives the same result.
    #[default]
    Replace,
    /// Keep existing sequences and append to them.
    Append,
}

/// Generation and slicing state for one shell.
#[derive(Debug)]
pub struct Session {
    config: ShellConfig,
    rng: Pcg64,
    today: Option<NaiveDate>,
    date_rank: Option<DateRank>,
    slice_file: SliceFile,
}

impl Session {
    /// Create a session. Uses `config.seed` when present, OS entropy otherwise.
    pub fn new(config: ShellConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => Pcg64::seed_from_u64(seed),
            None => Pcg64::from_entropy(),
        };
        Self { config, rng, today: None, date_rank: None, slice_file: SliceFile::new() }
    }

    /// Reseed the generator.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Pcg64::seed_from_u64(seed);
        self
    }

    /// Pin "today" instead of reading the local clock.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Generated ranks, or `None` until the first generation.
    pub fn date_rank(&self) -> Option<&DateRank> {
        self.date_rank.as_ref()
    }

    pub fn slice_file(&self) -> &SliceFile {
        &self.slice_file
    }

    /// Default slice width used when a command passes none.
    pub fn default_days_per_slice(&self) -> DaysPerSlice {
        self.config.days_per_slice
    }

    /// Replace the current ranks with a freshly generated set.
    pub fn generate_ranks(&mut self, params: &RankParams) -> SliceResult<&DateRank> {
        let today = self.today();
        let ranks = generate_ranks(params, today, &mut self.rng)?;
        debug!(generated = ranks.len(), requested = params.days, "generated ranks");
        Ok(self.date_rank.insert(ranks))
    }

    /// Generate ranks using the configured defaults.
    pub fn generate_default_ranks(&mut self) -> SliceResult<&DateRank> {
        let params = self.config.rank_defaults;
        self.generate_ranks(&params)
    }

    /// Bucket the current ranks into the slice file, generating ranks with
    /// the configured defaults first if none exist yet.
    pub fn perform_slicing(
        &mut self,
        days_per_slice: Option<i64>,
        mode: SliceMode,
    ) -> SliceResult<&SliceFile> {
        let days_per_slice = DaysPerSlice::resolve(days_per_slice, self.config.days_per_slice)?;

        if self.date_rank.is_none() {
            info!("Did not find generated ranks, generating with default values");
            self.generate_default_ranks()?;
        }

        // Not used for filtering yet.
        let today_slice = slicer::slice_offset(self.today(), days_per_slice);
        debug!(%today_slice, %days_per_slice, "slicing ranks");

        if mode == SliceMode::Replace {
            self.slice_file.clear();
        }
        if let Some(ranks) = &self.date_rank {
            slicer::bucket_ranks(ranks, days_per_slice, &mut self.slice_file);
        }

        if tracing::enabled!(Level::DEBUG) {
            for (slice, ranks) in self.slice_file.iter() {
                debug!("File [{slice}]:{}", join(ranks));
            }
        }

        Ok(&self.slice_file)
    }

    /// Dates covered by `slice`; see [`slicer::date_range`].
    pub fn date_range(
        &self,
        slice: SliceId,
        days_per_slice: Option<i64>,
    ) -> SliceResult<DateRange> {
        let days_per_slice = DaysPerSlice::resolve(days_per_slice, self.config.days_per_slice)?;
        slicer::date_range(slice, days_per_slice)
    }

    /// Slice ids spanning `start..=end`; see [`slicer::slices_between`].
    pub fn slices_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        days_per_slice: Option<i64>,
    ) -> SliceResult<Vec<SliceId>> {
        let days_per_slice = DaysPerSlice::resolve(days_per_slice, self.config.days_per_slice)?;
        Ok(slicer::slices_between(start, end, days_per_slice))
    }

    pub fn clear_slices(&mut self) {
        self.slice_file.clear();
    }

    /// Drop the generated ranks and the slice file.
    pub fn reset(&mut self) {
        self.date_rank = None;
        self.slice_file.clear();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ShellConfig::default())
    }
}

fn join(ranks: &[u32]) -> String {
    ranks.iter().map(u32::to_string).collect::<Vec<_>>().join(",")
}
