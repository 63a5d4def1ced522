use serde::Serialize;

use super::{color::HexColor, palette::ColorPalette};

pub const LIGHT_GREY: HexColor = HexColor::from_u32(0xE0E0E0);
pub const MEDIUM_GREY: HexColor = HexColor::from_u32(0xB0B0B0);
pub const CLEAR_SKY_BRIGHTENING: f64 = 0.1;

/// Cloud coverage tiers; lower bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CloudTier {
    Clear,
    PartlyCloudy,
    MostlyCloudy,
    Overcast,
}

impl CloudTier {
    #[must_use]
    pub const fn from_percent(percent: u8) -> Self {
        match percent {
            0..=19 => Self::Clear,
            20..=49 => Self::PartlyCloudy,
            50..=79 => Self::MostlyCloudy,
            80.. => Self::Overcast,
        }
    }
}

/// Weather condition families, in match priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ConditionKind {
    Rain,
    Thunder,
    Snow,
    Fog,
    Clear,
    Other,
}

const CONDITION_KEYWORDS: [(ConditionKind, &[&str]); 5] = [
    (ConditionKind::Rain, &["rain", "drizzle"]),
    (ConditionKind::Thunder, &["thunder", "storm"]),
    (ConditionKind::Snow, &["snow", "blizzard"]),
    (ConditionKind::Fog, &["fog", "mist", "haze"]),
    (ConditionKind::Clear, &["clear", "sunny"]),
];

impl ConditionKind {
    /// Case-insensitive substring match; the first family with a hit wins.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let lowered = text.to_lowercase();
        CONDITION_KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|kw| lowered.contains(kw)))
            .map_or(Self::Other, |(kind, _)| *kind)
    }
}

const fn hex(value: u32) -> HexColor {
    HexColor::from_u32(value)
}

fn fixed(primary: u32, gradient: [u32; 3]) -> ColorPalette {
    ColorPalette::new(hex(primary), &gradient.map(hex))
}

#[must_use]
pub fn overcast_palette() -> ColorPalette {
    fixed(0x8B8B8B, [0xA9A9A9, 0x8B8B8B, 0x707070])
}

/// First stage: grey the palette in proportion to cloud cover.
#[must_use]
pub fn apply_cloud_cover(palette: ColorPalette, coverage_percent: u8) -> ColorPalette {
    match CloudTier::from_percent(coverage_percent) {
        CloudTier::Clear => palette,
        CloudTier::PartlyCloudy => palette.map_with(
            |c| c.blend(LIGHT_GREY, 0.2),
            |c| c.blend(LIGHT_GREY, 0.15),
        ),
        CloudTier::MostlyCloudy => palette.map_with(
            |c| c.blend(MEDIUM_GREY, 0.4),
            |c| c.blend(MEDIUM_GREY, 0.35),
        ),
        CloudTier::Overcast => overcast_palette(),
    }
}

/// Second stage: precipitation and fog replace the palette outright, clear
/// skies brighten whatever the cloud stage produced.
#[must_use]
pub fn apply_condition(palette: ColorPalette, condition: ConditionKind) -> ColorPalette {
    match condition {
        ConditionKind::Rain => fixed(0x536878, [0x6B7B8B, 0x536878, 0x4A5A6A]),
        ConditionKind::Thunder => fixed(0x2C3E50, [0x34495E, 0x2C3E50, 0x1C2833]),
        ConditionKind::Snow => fixed(0xE8EAF6, [0xF5F5F5, 0xE8EAF6, 0xCFD8DC]),
        ConditionKind::Fog => fixed(0xB0BEC5, [0xCFD8DC, 0xB0BEC5, 0x90A4AE]),
        ConditionKind::Clear => palette.map_with(
            |c| c.brighten(CLEAR_SKY_BRIGHTENING),
            |c| c.brighten(CLEAR_SKY_BRIGHTENING),
        ),
        ConditionKind::Other => palette,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{palette::live_palette, period::LivePeriod};

    fn hexes(palette: &ColorPalette) -> (String, Vec<String>) {
        (
            palette.primary.to_string(),
            palette.gradient.iter().map(ToString::to_string).collect(),
        )
    }

    #[test]
    fn cloud_tier_lower_bounds_are_inclusive() {
        assert_eq!(CloudTier::from_percent(0), CloudTier::Clear);
        assert_eq!(CloudTier::from_percent(19), CloudTier::Clear);
        assert_eq!(CloudTier::from_percent(20), CloudTier::PartlyCloudy);
        assert_eq!(CloudTier::from_percent(49), CloudTier::PartlyCloudy);
        assert_eq!(CloudTier::from_percent(50), CloudTier::MostlyCloudy);
        assert_eq!(CloudTier::from_percent(79), CloudTier::MostlyCloudy);
        assert_eq!(CloudTier::from_percent(80), CloudTier::Overcast);
        assert_eq!(CloudTier::from_percent(100), CloudTier::Overcast);
    }

    #[test]
    fn clear_coverage_is_identity() {
        let base = live_palette(LivePeriod::Afternoon).expect("palette");
        assert_eq!(apply_cloud_cover(base.clone(), 19), base);
    }

    #[test]
    fn partly_cloudy_tints_toward_light_grey() {
        let base = live_palette(LivePeriod::EarlyMorning).expect("palette");
        let (primary, stops) = hexes(&apply_cloud_cover(base, 20));
        assert_eq!(primary, "#99d2e9");
        assert_eq!(stops.len(), 3);
        assert_eq!(stops[0], "#e0f3fa");
        assert_eq!(stops[1], "#94d1e9");
    }

    #[test]
    fn mostly_cloudy_tints_toward_medium_grey() {
        let base = live_palette(LivePeriod::Midday).expect("palette");
        let (primary, _) = hexes(&apply_cloud_cover(base, 50));
        // 0x1e*0.6 + 0xb0*0.4 = 88.4, 0x90 -> 156.8, 0xff -> 223.4
        assert_eq!(primary, "#589ddf");
    }

    #[test]
    fn overcast_discards_base_palette() {
        for period in LivePeriod::ALL {
            let base = live_palette(period).expect("palette");
            assert_eq!(apply_cloud_cover(base, 80), overcast_palette());
        }
    }

    #[test]
    fn condition_keywords_follow_priority_order() {
        assert_eq!(ConditionKind::from_text("Heavy Rain"), ConditionKind::Rain);
        assert_eq!(
            ConditionKind::from_text("Patchy light drizzle"),
            ConditionKind::Rain
        );
        assert_eq!(
            ConditionKind::from_text("Moderate or heavy rain with thunder"),
            ConditionKind::Rain
        );
        assert_eq!(
            ConditionKind::from_text("Thundery outbreaks possible"),
            ConditionKind::Thunder
        );
        assert_eq!(ConditionKind::from_text("Blowing snow"), ConditionKind::Snow);
        assert_eq!(ConditionKind::from_text("BLIZZARD"), ConditionKind::Snow);
        assert_eq!(ConditionKind::from_text("Freezing fog"), ConditionKind::Fog);
        assert_eq!(ConditionKind::from_text("Haze"), ConditionKind::Fog);
        assert_eq!(ConditionKind::from_text("Sunny"), ConditionKind::Clear);
        assert_eq!(ConditionKind::from_text("Clear"), ConditionKind::Clear);
        assert_eq!(ConditionKind::from_text("Partly cloudy"), ConditionKind::Other);
        assert_eq!(ConditionKind::from_text(""), ConditionKind::Other);
    }

    #[test]
    fn precipitation_replaces_palette() {
        let base = live_palette(LivePeriod::Dawn).expect("palette");
        let (primary, stops) = hexes(&apply_condition(base, ConditionKind::Rain));
        assert_eq!(primary, "#536878");
        assert_eq!(stops, ["#6b7b8b", "#536878", "#4a5a6a"]);
    }

    #[test]
    fn clear_brightens_cloud_stage_output() {
        let tinted = apply_cloud_cover(live_palette(LivePeriod::Midday).expect("palette"), 50);
        let brightened = apply_condition(tinted.clone(), ConditionKind::Clear);
        assert_eq!(brightened.primary, tinted.primary.brighten(0.1));
        assert_eq!(brightened.gradient.len(), tinted.gradient.len());
    }

    #[test]
    fn unmatched_condition_passes_through() {
        let base = live_palette(LivePeriod::Evening).expect("palette");
        assert_eq!(apply_condition(base.clone(), ConditionKind::Other), base);
    }
}
