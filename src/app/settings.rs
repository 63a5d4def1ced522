use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    cli::{Cli, ModeArg},
    data::weatherapi::WEATHER_API_URL,
    domain::zip::ZipCode,
};

pub const API_KEY_ENV: &str = "WEATHERAPI_KEY";
pub const CONFIG_DIR_ENV: &str = "SKY_COLOR_CONFIG_DIR";
pub const DEFAULT_REFRESH_SECS: u64 = 600;
pub const MIN_REFRESH_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api_key: Option<String>,
    pub weather_url: String,
    pub mode: ModeArg,
    pub refresh_interval_secs: u64,
    pub default_zip: Option<ZipCode>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: None,
            weather_url: WEATHER_API_URL.to_string(),
            mode: ModeArg::Live,
            refresh_interval_secs: DEFAULT_REFRESH_SECS,
            default_zip: None,
        }
    }
}

/// Resolves settings with precedence CLI flag > environment > file > default.
pub fn load_settings(cli: &Cli, enable_disk: bool) -> (Settings, Option<PathBuf>) {
    let path = if enable_disk { settings_path() } else { None };
    let saved = path
        .as_deref()
        .and_then(read_settings_file)
        .unwrap_or_default();
    let env_key = std::env::var(API_KEY_ENV).ok();
    (apply_overrides(saved, cli, env_key), path)
}

/// Missing files are silent; unreadable or malformed files are logged and skipped.
pub fn read_settings_file(path: &Path) -> Option<Settings> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
        Err(err) => {
            warn!(path = %path.display(), %err, "could not read settings file");
            return None;
        }
    };
    serde_json::from_str(&content)
        .inspect_err(|err| warn!(path = %path.display(), %err, "ignoring malformed settings file"))
        .ok()
}

#[must_use]
pub fn apply_overrides(mut settings: Settings, cli: &Cli, env_api_key: Option<String>) -> Settings {
    if let Some(key) = env_api_key.filter(|key| !key.trim().is_empty()) {
        settings.api_key = Some(key);
    }
    if let Some(key) = cli.api_key.clone() {
        settings.api_key = Some(key);
    }
    if let Some(url) = cli.weather_url.clone() {
        settings.weather_url = url;
    }
    if let Some(mode) = cli.mode {
        settings.mode = mode;
    }
    if let Some(secs) = cli.refresh_interval {
        settings.refresh_interval_secs = secs;
    }
    if let Some(zip) = cli.zip.clone() {
        settings.default_zip = Some(zip);
    }
    settings
}

/// Persists the zip, mode and refresh interval, leaving any stored key untouched.
pub fn remember_defaults(path: &Path, effective: &Settings) -> anyhow::Result<()> {
    let mut stored = read_settings_file(path).unwrap_or_default();
    stored.default_zip.clone_from(&effective.default_zip);
    stored.mode = effective.mode;
    stored.refresh_interval_secs = effective.refresh_interval_secs;
    save_settings(path, &stored)
}

pub fn save_settings(path: &Path, settings: &Settings) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("creating settings directory failed")?;
    }
    let payload =
        serde_json::to_string_pretty(settings).context("serializing settings payload failed")?;
    fs::write(path, payload).context("writing settings file failed")
}

fn settings_path() -> Option<PathBuf> {
    if let Some(base) = std::env::var_os(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(base).join("settings.json"));
    }

    let home = std::env::var_os("HOME")?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join("sky-color")
            .join("settings.json"),
    )
}

#[cfg(test)]
mod tests;
