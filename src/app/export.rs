use std::{fmt::Write as _, fs, path::Path};

use anyhow::{Context, Result};
use html_escape::encode_text;

use crate::domain::{color::HexColor, sky::SkyColorResult, zip::ZipCode};

/// Renders a phone-wallpaper SVG: a top-to-bottom gradient through every
/// stop with the description, primary hex and zip centered over it.
#[must_use]
pub fn wallpaper_svg(result: &SkyColorResult, zip: &ZipCode, width: u32, height: u32) -> String {
    let stops = gradient_stops(result);
    let last = stops.len().saturating_sub(1).max(1);

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg width="{width}" height="{height}" xmlns="http://www.w3.org/2000/svg">"#
    );
    svg.push_str("  <defs>\n");
    svg.push_str(
        r#"    <linearGradient id="skyGradient" x1="0%" y1="0%" x2="0%" y2="100%">"#,
    );
    svg.push('\n');
    for (index, stop) in stops.iter().enumerate() {
        let _ = writeln!(
            svg,
            r#"      <stop offset="{}%" style="stop-color:{stop};stop-opacity:1" />"#,
            stop_offset(index, last)
        );
    }
    svg.push_str("    </linearGradient>\n  </defs>\n");
    svg.push_str(r#"  <rect width="100%" height="100%" fill="url(#skyGradient)"/>"#);
    svg.push('\n');
    push_text(&mut svg, "40%", r#"font-size="28" fill="white" font-weight="bold""#, &result.description);
    push_text(&mut svg, "50%", r#"font-size="20" fill="white""#, &result.primary_color.to_string());
    push_text(
        &mut svg,
        "60%",
        r#"font-size="16" fill="white" opacity="0.8""#,
        &format!("Zip: {zip}"),
    );
    svg.push_str("</svg>\n");
    svg
}

pub fn write_wallpaper(path: &Path, svg: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {} failed", parent.display()))?;
    }
    fs::write(path, svg).with_context(|| format!("writing wallpaper to {} failed", path.display()))
}

fn gradient_stops(result: &SkyColorResult) -> Vec<HexColor> {
    if result.gradient_colors.len() >= 2 {
        result.gradient_colors.clone()
    } else {
        vec![result.primary_color; 2]
    }
}

fn stop_offset(index: usize, last: usize) -> f64 {
    let raw = index as f64 * 100.0 / last as f64;
    (raw * 100.0).round() / 100.0
}

fn push_text(svg: &mut String, y: &str, attrs: &str, content: &str) {
    let _ = writeln!(
        svg,
        r#"  <text x="50%" y="{y}" text-anchor="middle" dy=".3em" font-family="Arial" {attrs}>{}</text>"#,
        encode_text(content)
    );
}
