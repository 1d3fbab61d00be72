use std::path::Path;

use anyhow::Result;
use chrono::NaiveDate;
use window_date_core::config::{load_config, ShellConfig};
use window_date_core::session::Session;

pub mod commands;
pub mod shell;

/// clap value parser for `YYYY-MM-DD` arguments.
pub fn parse_date_arg(input: &str) -> Result<NaiveDate, String> {
    window_date_core::model::parse_date(input).map_err(|e| e.to_string())
}

/// Load the config file if one was given, otherwise use built-in defaults.
pub fn load_config_or_default(path: Option<&Path>) -> Result<ShellConfig> {
    match path {
        Some(path) => load_config(path),
        None => Ok(ShellConfig::default()),
    }
}

/// Build a session from config plus command-line overrides.
pub fn build_session(
    config: ShellConfig,
    seed: Option<u64>,
    today: Option<NaiveDate>,
) -> Session {
    let mut session = Session::new(config);
    if let Some(seed) = seed {
        session = session.with_seed(seed);
    }
    if let Some(today) = today {
        session = session.with_today(today);
    }
    session
}
