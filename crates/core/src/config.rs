use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::DaysPerSlice;
use crate::ranks::RankParams;

/// Serializable defaults for a shell session.
///
/// Every field is optional in the file; missing fields take the built-in
/// defaults (5% dropped, lowest rank 200, 20 days, 30 days per slice).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Parameters used by `generate-ranks` for any argument the caller omits.
    #[serde(default)]
    pub rank_defaults: RankParams,
    /// Slice width used when a command passes no width (or zero).
    #[serde(default)]
    pub days_per_slice: DaysPerSlice,
    /// Fixed RNG seed. Ranks are drawn from OS entropy when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Default `tracing` filter directive when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            rank_defaults: RankParams::default(),
            days_per_slice: DaysPerSlice::DEFAULT,
            seed: None,
            log_level: default_log_level(),
        }
    }
}

impl ShellConfig {
    /// Check the values that deserialization alone cannot enforce.
    pub fn validate(&self) -> Result<()> {
        let defaults = &self.rank_defaults;
        RankParams::new(
            i64::from(defaults.percentage_dropped),
            i64::from(defaults.lowest_rank),
            i64::from(defaults.days),
        )
        .context("invalid rank_defaults")?;
        if self.log_level.trim().is_empty() {
            bail!("invalid log_level: must not be empty");
        }
        Ok(())
    }
}

/// Load a config file, choosing JSON or YAML by extension (`.yaml`/`.yml` are
/// YAML, anything else is JSON).
pub fn load_config(path: &Path) -> Result<ShellConfig> {
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config at {}", path.display()))?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
    let config: ShellConfig = if matches!(ext, "yaml" | "yml") {
        serde_yaml::from_str(&body).context("Failed to parse config YAML")?
    } else {
        serde_json::from_str(&body).context("Failed to parse config JSON")?
    };
    config.validate()?;
    Ok(config)
}
