#![allow(clippy::missing_errors_doc)]

use std::path::PathBuf;

use chrono::NaiveTime;
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::domain::zip::ZipCode;

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ModeArg {
    #[default]
    Live,
    Simulated,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputArg {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ColorArg {
    Auto,
    Always,
    Never,
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Parser, Clone)]
#[command(
    name = "sky-color",
    version,
    about = "Derive the color of the sky for a US zip code"
)]
pub struct Cli {
    /// US zip code, 12345 or 12345-6789 (default: saved default_zip)
    pub zip: Option<ZipCode>,

    /// Color source
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// WeatherAPI.com key (also read from WEATHERAPI_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Weather provider base URL
    #[arg(long)]
    pub weather_url: Option<String>,

    /// Derive for today at this local time (HH:MM, 24-hour)
    #[arg(long, value_parser = parse_clock_arg, conflicts_with = "watch")]
    pub at: Option<NaiveTime>,

    /// Result rendering
    #[arg(long, value_enum, default_value_t = OutputArg::Text)]
    pub output: OutputArg,

    /// Swatch color policy
    #[arg(long, value_enum, default_value_t = ColorArg::Auto, conflicts_with = "no_color")]
    pub color: ColorArg,

    /// Alias for --color never
    #[arg(long, conflicts_with = "color")]
    pub no_color: bool,

    /// Write a wallpaper SVG to this path
    #[arg(long)]
    pub export_svg: Option<PathBuf>,

    /// Wallpaper width in pixels
    #[arg(long, default_value_t = 1170)]
    pub width: u32,

    /// Wallpaper height in pixels
    #[arg(long, default_value_t = 2532)]
    pub height: u32,

    /// Keep re-deriving until interrupted
    #[arg(long)]
    pub watch: bool,

    /// Seconds between derivations in watch mode
    #[arg(long, value_parser = clap::value_parser!(u64).range(10..))]
    pub refresh_interval: Option<u64>,

    /// Save the effective zip, mode and refresh interval as defaults
    #[arg(long)]
    pub save_defaults: bool,
}

impl Cli {
    #[must_use]
    pub fn effective_color_mode(&self) -> ColorArg {
        if self.no_color {
            ColorArg::Never
        } else {
            self.color
        }
    }
}

fn parse_clock_arg(value: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|_| format!("expected HH:MM in 24-hour time, got {value:?}"))
}
