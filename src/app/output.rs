use std::fmt::Write as _;

use anyhow::{Context, Result};
use crossterm::style::{Color, Stylize};

use crate::{
    app::acquire::{Origin, SkyOutcome},
    cli::ColorArg,
    domain::color::HexColor,
};

const SWATCH: &str = "██";

/// How hex values are decorated in text output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwatchStyle {
    TrueColor,
    Xterm256,
    Plain,
}

#[must_use]
pub fn detect_swatch_style(mode: ColorArg, is_terminal: bool) -> SwatchStyle {
    let term = std::env::var("TERM").ok();
    let colorterm = std::env::var("COLORTERM").ok();
    let no_color = std::env::var("NO_COLOR").ok();
    detect_swatch_style_from(
        mode,
        is_terminal,
        term.as_deref(),
        colorterm.as_deref(),
        no_color.as_deref(),
    )
}

/// `Always` still draws a swatch on terminals with no capability hints,
/// using the 256-color cube.
#[must_use]
pub fn detect_swatch_style_from(
    mode: ColorArg,
    is_terminal: bool,
    term: Option<&str>,
    colorterm: Option<&str>,
    no_color: Option<&str>,
) -> SwatchStyle {
    let auto_disabled = !is_terminal
        || no_color.is_some_and(|value| !value.is_empty())
        || term.is_some_and(|value| value.eq_ignore_ascii_case("dumb"));
    if mode == ColorArg::Never || (mode == ColorArg::Auto && auto_disabled) {
        return SwatchStyle::Plain;
    }

    let colorterm = colorterm.unwrap_or_default().to_lowercase();
    let term = term.unwrap_or_default().to_lowercase();
    if truecolor_hint(&colorterm) || truecolor_hint(&term) {
        SwatchStyle::TrueColor
    } else if term.contains("256color") || mode == ColorArg::Always {
        SwatchStyle::Xterm256
    } else {
        SwatchStyle::Plain
    }
}

fn truecolor_hint(value: &str) -> bool {
    value.contains("truecolor") || value.contains("24bit") || value.ends_with("direct")
}

/// Nearest entry in the 6x6x6 xterm color cube.
#[must_use]
pub fn xterm256_index(color: HexColor) -> u8 {
    let (r, g, b) = color.channels();
    let level = |value: u8| (f32::from(value) / 255.0 * 5.0).round() as u8;
    16 + 36 * level(r) + 6 * level(g) + level(b)
}

fn swatch(color: HexColor, style: SwatchStyle) -> Option<String> {
    let (r, g, b) = color.channels();
    let tint = match style {
        SwatchStyle::TrueColor => Color::Rgb { r, g, b },
        SwatchStyle::Xterm256 => Color::AnsiValue(xterm256_index(color)),
        SwatchStyle::Plain => return None,
    };
    Some(SWATCH.with(tint).to_string())
}

fn labelled(color: HexColor, style: SwatchStyle) -> String {
    match swatch(color, style) {
        Some(block) => format!("{block} {color}"),
        None => color.to_string(),
    }
}

#[must_use]
pub fn render_text(outcome: &SkyOutcome, style: SwatchStyle) -> String {
    let result = &outcome.result;
    let gradient = result
        .gradient_colors
        .iter()
        .map(|stop| labelled(*stop, style))
        .collect::<Vec<_>>()
        .join("  ");

    let mut out = String::new();
    let _ = writeln!(out, "{}", result.description);
    let _ = writeln!(out, "  primary   {}", labelled(result.primary_color, style));
    let _ = writeln!(out, "  gradient  {gradient}");
    let _ = writeln!(out, "  source    {}", result.source_location_label);
    if let Origin::Fallback { reason } = &outcome.origin {
        let _ = writeln!(out, "  note      live weather unavailable: {reason}");
    }
    out
}

pub fn render_json(outcome: &SkyOutcome) -> Result<String> {
    serde_json::to_string_pretty(&outcome.result).context("serializing sky color result failed")
}
