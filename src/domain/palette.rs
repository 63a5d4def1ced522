use std::{collections::HashMap, sync::LazyLock};

use serde::Serialize;

use super::{
    color::HexColor,
    period::{LivePeriod, SimulatedPeriod},
};
use crate::error::SkyError;

/// Seed used when a location identifier has no usable leading number.
pub const DEFAULT_SEED: u64 = 10_000;

/// Number of primaries per simulated bucket.
pub const SIMULATED_ROTATION: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorPalette {
    pub primary: HexColor,
    pub gradient: Vec<HexColor>,
}

impl ColorPalette {
    #[must_use]
    pub fn new(primary: HexColor, gradient: &[HexColor]) -> Self {
        debug_assert!(gradient.len() >= 2, "gradients need at least two stops");
        Self {
            primary,
            gradient: gradient.to_vec(),
        }
    }

    /// Applies separate transforms to the primary color and to every gradient stop.
    #[must_use]
    pub fn map_with(
        &self,
        primary: impl Fn(HexColor) -> HexColor,
        stop: impl Fn(HexColor) -> HexColor,
    ) -> Self {
        Self {
            primary: primary(self.primary),
            gradient: self.gradient.iter().copied().map(stop).collect(),
        }
    }
}

const fn hex(value: u32) -> HexColor {
    HexColor::from_u32(value)
}

const LIVE_PALETTES: [(LivePeriod, HexColor, [HexColor; 3]); 8] = [
    (
        LivePeriod::Night,
        hex(0x0B1426),
        [hex(0x000428), hex(0x004E92), hex(0x0B1426)],
    ),
    (
        LivePeriod::Dawn,
        hex(0xFF6B6B),
        [hex(0xFF6B6B), hex(0xFFB347), hex(0x87CEEB)],
    ),
    (
        LivePeriod::EarlyMorning,
        hex(0x87CEEB),
        [hex(0xE0F6FF), hex(0x87CEEB), hex(0x4A90E2)],
    ),
    (
        LivePeriod::LateMorning,
        hex(0x4A90E2),
        [hex(0x87CEEB), hex(0x4A90E2), hex(0x1E90FF)],
    ),
    (
        LivePeriod::Midday,
        hex(0x1E90FF),
        [hex(0x4A90E2), hex(0x1E90FF), hex(0x00BFFF)],
    ),
    (
        LivePeriod::Afternoon,
        hex(0x4682B4),
        [hex(0x5F9EA0), hex(0x4682B4), hex(0x6495ED)],
    ),
    (
        LivePeriod::Dusk,
        hex(0xFF8E53),
        [hex(0x87CEEB), hex(0xFF8E53), hex(0xFF6B6B)],
    ),
    (
        LivePeriod::Evening,
        hex(0x483D8B),
        [hex(0x191970), hex(0x483D8B), hex(0x6A5ACD)],
    ),
];

const SIMULATED_PRIMARIES: [(SimulatedPeriod, [HexColor; SIMULATED_ROTATION]); 7] = [
    (
        SimulatedPeriod::Night,
        [hex(0x0B1426), hex(0x1A1A2E), hex(0x16213E), hex(0x0F3460), hex(0x1E3A8A)],
    ),
    (
        SimulatedPeriod::Dawn,
        [hex(0xFF6B6B), hex(0xFF8E53), hex(0xFFB347), hex(0xFFD93D), hex(0xFFE66D)],
    ),
    (
        SimulatedPeriod::Morning,
        [hex(0x87CEEB), hex(0x87CEFA), hex(0xB0E0E6), hex(0xADD8E6), hex(0xE0F6FF)],
    ),
    (
        SimulatedPeriod::Noon,
        [hex(0x4A90E2), hex(0x1E90FF), hex(0x00BFFF), hex(0x87CEEB), hex(0xB0E0E6)],
    ),
    (
        SimulatedPeriod::Afternoon,
        [hex(0x4682B4), hex(0x5F9EA0), hex(0x6495ED), hex(0x7B68EE), hex(0x9370DB)],
    ),
    (
        SimulatedPeriod::Dusk,
        [hex(0xFF6B6B), hex(0xFF8E53), hex(0xFFB347), hex(0xFFD93D), hex(0xFFE66D)],
    ),
    (
        SimulatedPeriod::Evening,
        [hex(0x191970), hex(0x483D8B), hex(0x6A5ACD), hex(0x7B68EE), hex(0x9370DB)],
    ),
];

/// Two-stop companion gradients for simulated primaries.
const COMPANION_GRADIENTS: [(HexColor, [HexColor; 2]); 16] = [
    (hex(0x87CEEB), [hex(0x4A90E2), hex(0x7B68EE)]),
    (hex(0x4682B4), [hex(0x2E5A88), hex(0x5F9EA0)]),
    (hex(0x1E90FF), [hex(0x0066CC), hex(0x4A90E2)]),
    (hex(0x00BFFF), [hex(0x0099CC), hex(0x87CEEB)]),
    (hex(0x87CEFA), [hex(0x5F9EA0), hex(0xB0E0E6)]),
    (hex(0xB0E0E6), [hex(0x87CEEB), hex(0xE0F6FF)]),
    (hex(0xADD8E6), [hex(0x87CEEB), hex(0xF0F8FF)]),
    (hex(0xF0F8FF), [hex(0xE0F6FF), hex(0xFFFFFF)]),
    (hex(0xE0F6FF), [hex(0xB0E0E6), hex(0xF0F8FF)]),
    (hex(0xB8E6B8), [hex(0x90EE90), hex(0xE0F6FF)]),
    (hex(0x191970), [hex(0x000080), hex(0x483D8B)]),
    (hex(0xFF6B6B), [hex(0xFF4757), hex(0xFF6B6B)]),
    (hex(0xFF8E53), [hex(0xFF6B6B), hex(0xFF8E53)]),
    (hex(0xFFB347), [hex(0xFF8E53), hex(0xFFB347)]),
    (hex(0xFFD93D), [hex(0xFFB347), hex(0xFFD93D)]),
    (hex(0xFFE66D), [hex(0xFFD93D), hex(0xFFE66D)]),
];

/// Companion for primaries with no dedicated entry above.
const STANDARD_DAY_GRADIENT: [HexColor; 2] = [hex(0x4A90E2), hex(0x7B68EE)];

static LIVE_TABLE: LazyLock<HashMap<LivePeriod, ColorPalette>> = LazyLock::new(|| {
    LIVE_PALETTES
        .iter()
        .map(|(period, primary, gradient)| (*period, ColorPalette::new(*primary, gradient)))
        .collect()
});

static SIMULATED_TABLE: LazyLock<HashMap<SimulatedPeriod, Vec<ColorPalette>>> =
    LazyLock::new(|| {
        let companions: HashMap<HexColor, [HexColor; 2]> =
            COMPANION_GRADIENTS.iter().copied().collect();
        SIMULATED_PRIMARIES
            .iter()
            .map(|(period, primaries)| {
                let entries: Vec<ColorPalette> = primaries
                    .iter()
                    .map(|primary| {
                        let gradient = companions
                            .get(primary)
                            .unwrap_or(&STANDARD_DAY_GRADIENT);
                        ColorPalette::new(*primary, gradient)
                    })
                    .collect();
                (*period, entries)
            })
            .collect()
    });

/// Base palette for a live bucket.
pub fn live_palette(period: LivePeriod) -> Result<ColorPalette, SkyError> {
    LIVE_TABLE
        .get(&period)
        .cloned()
        .ok_or_else(|| SkyError::Invariant(format!("no live palette for {period:?}")))
}

/// Seeded palette for a simulated bucket; the entry is `seed mod 5`.
pub fn simulated_palette(period: SimulatedPeriod, seed: u64) -> Result<ColorPalette, SkyError> {
    let entries = SIMULATED_TABLE
        .get(&period)
        .ok_or_else(|| SkyError::Invariant(format!("no simulated palettes for {period:?}")))?;
    let index = (seed % SIMULATED_ROTATION as u64) as usize;
    entries.get(index).cloned().ok_or_else(|| {
        SkyError::Invariant(format!(
            "simulated palettes for {period:?} have {} entries, wanted index {index}",
            entries.len()
        ))
    })
}

/// Reads the leading decimal digits of a location identifier, so `"10001-1234"`
/// seeds as `10001`. Identifiers with no leading digits, or a zero value, use
/// [`DEFAULT_SEED`].
#[must_use]
pub fn seed_for_location(location_id: &str) -> u64 {
    let trimmed = location_id.trim_start();
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    match trimmed[..digits_end].parse::<u64>() {
        Ok(0) | Err(_) => DEFAULT_SEED,
        Ok(seed) => seed,
    }
}
