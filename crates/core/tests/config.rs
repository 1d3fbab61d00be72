use std::fs;

use tempfile::tempdir;
use window_date_core::config::{load_config, ShellConfig};
use window_date_core::ranks::RankParams;

#[test]
fn defaults_match_built_in_values() {
    let config = ShellConfig::default();
    assert_eq!(config.rank_defaults, RankParams::default());
    assert_eq!(config.days_per_slice.get(), 30);
    assert_eq!(config.seed, None);
    assert_eq!(config.log_level, "info");
    config.validate().expect("defaults are valid");
}

#[test]
fn loads_partial_json_config() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("window-date.json");
    fs::write(&path, r#"{"rank_defaults":{"days":45},"seed":7}"#).unwrap();

    let config = load_config(&path).expect("load");
    assert_eq!(config.rank_defaults.days, 45);
    assert_eq!(config.rank_defaults.lowest_rank, 200);
    assert_eq!(config.seed, Some(7));
    assert_eq!(config.days_per_slice.get(), 30);
}

#[test]
fn loads_yaml_config() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("window-date.yaml");
    let yaml = "days_per_slice: 7\nlog_level: debug\nrank_defaults:\n  percentage_dropped: 0\n";
    fs::write(&path, yaml).unwrap();

    let config = load_config(&path).expect("load");
    assert_eq!(config.days_per_slice.get(), 7);
    assert_eq!(config.log_level, "debug");
    assert_eq!(config.rank_defaults.percentage_dropped, 0);
}

#[test]
fn rejects_invalid_values() {
    let dir = tempdir().expect("tempdir");

    let bad_width = dir.path().join("width.json");
    fs::write(&bad_width, r#"{"days_per_slice":-3}"#).unwrap();
    assert!(load_config(&bad_width).is_err());

    let bad_pct = dir.path().join("pct.json");
    fs::write(&bad_pct, r#"{"rank_defaults":{"percentage_dropped":150}}"#).unwrap();
    let err = load_config(&bad_pct).unwrap_err();
    assert!(format!("{err:#}").contains("rank_defaults"));

    let bad_rank = dir.path().join("rank.json");
    fs::write(&bad_rank, r#"{"rank_defaults":{"lowest_rank":0}}"#).unwrap();
    assert!(load_config(&bad_rank).is_err());
}

#[test]
fn missing_file_reports_path() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("absent.json");
    let err = load_config(&path).unwrap_err();
    assert!(err.to_string().contains("absent.json"));
}
