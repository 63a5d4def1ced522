use clap::Parser;
use tempfile::NamedTempFile;

use super::{
    DEFAULT_REFRESH_SECS, Settings, apply_overrides, load_settings, read_settings_file,
    remember_defaults, save_settings,
};
use crate::{
    cli::{Cli, ModeArg},
    data::weatherapi::WEATHER_API_URL,
    domain::zip::ZipCode,
};

fn cli(args: &[&str]) -> Cli {
    Cli::parse_from(std::iter::once("sky-color").chain(args.iter().copied()))
}

fn zip(value: &str) -> ZipCode {
    ZipCode::parse(value).expect("valid zip fixture")
}

#[test]
fn defaults_point_at_live_weatherapi() {
    let settings = Settings::default();
    assert_eq!(settings.mode, ModeArg::Live);
    assert_eq!(settings.weather_url, WEATHER_API_URL);
    assert_eq!(settings.refresh_interval_secs, DEFAULT_REFRESH_SECS);
    assert!(settings.api_key.is_none());
}

#[test]
fn load_settings_without_disk_uses_cli_only() {
    let (settings, path) = load_settings(&cli(&["10001", "--mode", "simulated"]), false);
    assert!(path.is_none());
    assert_eq!(settings.mode, ModeArg::Simulated);
    assert_eq!(settings.default_zip, Some(zip("10001")));
}

#[test]
fn settings_roundtrip_through_file() {
    let settings = Settings {
        api_key: Some("abc123".to_string()),
        mode: ModeArg::Simulated,
        refresh_interval_secs: 120,
        default_zip: Some(zip("94103")),
        ..Settings::default()
    };

    let file = NamedTempFile::new().expect("create temp settings file");
    save_settings(file.path(), &settings).expect("save settings");
    let restored = read_settings_file(file.path()).expect("read settings");

    assert_eq!(restored, settings);
}

#[test]
fn partial_file_fills_in_defaults() {
    let file = NamedTempFile::new().expect("create temp settings file");
    std::fs::write(file.path(), r#"{"default_zip": "60601"}"#).expect("write settings");

    let restored = read_settings_file(file.path()).expect("read settings");
    assert_eq!(restored.default_zip, Some(zip("60601")));
    assert_eq!(restored.mode, ModeArg::Live);
    assert_eq!(restored.refresh_interval_secs, DEFAULT_REFRESH_SECS);
}

#[test]
fn malformed_or_missing_files_are_ignored() {
    let file = NamedTempFile::new().expect("create temp settings file");
    std::fs::write(file.path(), r#"{"default_zip": "6060"}"#).expect("write settings");
    assert!(read_settings_file(file.path()).is_none());

    let dir = tempfile::tempdir().expect("create temp dir");
    assert!(read_settings_file(&dir.path().join("missing.json")).is_none());
}

#[test]
fn cli_overrides_env_which_overrides_file() {
    let saved = Settings {
        api_key: Some("from-file".to_string()),
        mode: ModeArg::Simulated,
        ..Settings::default()
    };

    let from_env = apply_overrides(saved.clone(), &cli(&[]), Some("from-env".to_string()));
    assert_eq!(from_env.api_key.as_deref(), Some("from-env"));
    assert_eq!(from_env.mode, ModeArg::Simulated);

    let from_cli = apply_overrides(
        saved.clone(),
        &cli(&["--api-key", "from-cli", "--mode", "live", "--refresh-interval", "30"]),
        Some("from-env".to_string()),
    );
    assert_eq!(from_cli.api_key.as_deref(), Some("from-cli"));
    assert_eq!(from_cli.mode, ModeArg::Live);
    assert_eq!(from_cli.refresh_interval_secs, 30);

    let blank_env = apply_overrides(saved, &cli(&[]), Some("  ".to_string()));
    assert_eq!(blank_env.api_key.as_deref(), Some("from-file"));
}

#[test]
fn remember_defaults_keeps_stored_key() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("nested").join("settings.json");
    save_settings(
        &path,
        &Settings {
            api_key: Some("stored".to_string()),
            ..Settings::default()
        },
    )
    .expect("seed settings");

    let effective = Settings {
        api_key: Some("one-off".to_string()),
        mode: ModeArg::Simulated,
        refresh_interval_secs: 90,
        default_zip: Some(zip("02139")),
        ..Settings::default()
    };
    remember_defaults(&path, &effective).expect("remember defaults");

    let stored = read_settings_file(&path).expect("read settings");
    assert_eq!(stored.api_key.as_deref(), Some("stored"));
    assert_eq!(stored.mode, ModeArg::Simulated);
    assert_eq!(stored.refresh_interval_secs, 90);
    assert_eq!(stored.default_zip, Some(zip("02139")));
}
