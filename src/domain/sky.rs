use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    adjust::{CloudTier, ConditionKind, apply_cloud_cover, apply_condition},
    clock::{AstronomyInfo, ClockTime},
    color::HexColor,
    describe::{live_description, simulated_description},
    palette::{live_palette, seed_for_location, simulated_palette},
    period::{LivePeriod, SimulatedPeriod, classify_live, classify_simulated},
};
use crate::error::SkyError;

pub const SIMULATED_LABEL: &str = "Simulated";
pub const FALLBACK_LABEL: &str = "Simulated (API Error)";

/// Largest brightness lift applied at minute 59 of a simulated hour.
pub const MINUTE_VARIATION: f64 = 0.1;

/// Current conditions as reported by the weather provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherObservation {
    pub is_daytime: bool,
    pub cloud_coverage_percent: u8,
    pub condition_text: String,
    pub condition_code: u16,
    pub location_label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "period", rename_all = "camelCase")]
pub enum SkyPeriod {
    Live(LivePeriod),
    Simulated(SimulatedPeriod),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkyColorResult {
    pub primary_color: HexColor,
    pub gradient_colors: Vec<HexColor>,
    pub time_period: SkyPeriod,
    pub description: String,
    pub source_location_label: String,
}

/// Derives the sky color from a live observation.
///
/// Pipeline: classify the clock time (sunrise/sunset windows first when
/// `astronomy` is present), look up the base palette, tint for cloud cover,
/// then apply the condition override. The clear-sky brightening runs on the
/// cloud-stage output, not the base palette.
pub fn compute_live(
    observation: &WeatherObservation,
    astronomy: Option<&AstronomyInfo>,
    now: NaiveDateTime,
) -> Result<SkyColorResult, SkyError> {
    let period = classify_live(ClockTime::of(&now), astronomy);
    let base = live_palette(period)?;

    let tier = CloudTier::from_percent(observation.cloud_coverage_percent);
    let condition = ConditionKind::from_text(&observation.condition_text);
    debug!(
        ?period,
        ?tier,
        ?condition,
        code = observation.condition_code,
        "deriving live sky color"
    );

    let clouded = apply_cloud_cover(base, observation.cloud_coverage_percent);
    let palette = apply_condition(clouded, condition);

    Ok(SkyColorResult {
        primary_color: palette.primary,
        gradient_colors: palette.gradient,
        time_period: SkyPeriod::Live(period),
        description: live_description(period, &observation.condition_text),
        source_location_label: observation.location_label.clone(),
    })
}

/// Seeded derivation used when no observation is requested.
pub fn compute_simulated(
    location_id: &str,
    now: NaiveDateTime,
) -> Result<SkyColorResult, SkyError> {
    simulate(location_id, now, SIMULATED_LABEL)
}

/// Same derivation as [`compute_simulated`], labelled as a fallback after a
/// failed live fetch.
pub fn compute_fallback(
    location_id: &str,
    now: NaiveDateTime,
) -> Result<SkyColorResult, SkyError> {
    simulate(location_id, now, FALLBACK_LABEL)
}

fn simulate(
    location_id: &str,
    now: NaiveDateTime,
    label: &str,
) -> Result<SkyColorResult, SkyError> {
    let clock = ClockTime::of(&now);
    let period = classify_simulated(clock);
    let seed = seed_for_location(location_id);
    let palette = simulated_palette(period, seed)?;
    debug!(?period, seed, "deriving simulated sky color");

    Ok(SkyColorResult {
        primary_color: palette
            .primary
            .shift_brightness(minute_variation(clock.minute())),
        gradient_colors: palette.gradient,
        time_period: SkyPeriod::Simulated(period),
        description: simulated_description(period),
        source_location_label: label.to_string(),
    })
}

fn minute_variation(minute: u8) -> f64 {
    f64::from(minute) / 60.0 * MINUTE_VARIATION
}
