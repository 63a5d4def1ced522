use serde::{Deserialize, Serialize};

use super::clock::{AstronomyInfo, ClockTime};

/// Minutes either side of sunrise or sunset that count as dawn or dusk.
pub const TWILIGHT_WINDOW_MINUTES: i32 = 30;

/// Day segments used when a live observation is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LivePeriod {
    Night,
    Dawn,
    EarlyMorning,
    LateMorning,
    Midday,
    Afternoon,
    Dusk,
    Evening,
}

impl LivePeriod {
    pub const ALL: [Self; 8] = [
        Self::Night,
        Self::Dawn,
        Self::EarlyMorning,
        Self::LateMorning,
        Self::Midday,
        Self::Afternoon,
        Self::Dusk,
        Self::Evening,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Night => "Night",
            Self::Dawn => "Dawn",
            Self::EarlyMorning => "Morning",
            Self::LateMorning => "Late Morning",
            Self::Midday => "Midday",
            Self::Afternoon => "Afternoon",
            Self::Dusk => "Dusk",
            Self::Evening => "Evening",
        }
    }

    #[must_use]
    pub const fn for_hour(hour: u8) -> Self {
        match hour {
            0..=4 | 22.. => Self::Night,
            5..=6 => Self::Dawn,
            7..=9 => Self::EarlyMorning,
            10..=11 => Self::LateMorning,
            12..=14 => Self::Midday,
            15..=16 => Self::Afternoon,
            17..=18 => Self::Dusk,
            19..=21 => Self::Evening,
        }
    }
}

/// Day segments used by the seeded simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SimulatedPeriod {
    Night,
    Dawn,
    Morning,
    Noon,
    Afternoon,
    Dusk,
    Evening,
}

impl SimulatedPeriod {
    pub const ALL: [Self; 7] = [
        Self::Night,
        Self::Dawn,
        Self::Morning,
        Self::Noon,
        Self::Afternoon,
        Self::Dusk,
        Self::Evening,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Night => "Night Sky",
            Self::Dawn => "Dawn Breaking",
            Self::Morning => "Morning Sky",
            Self::Noon => "Midday Sky",
            Self::Afternoon => "Afternoon Sky",
            Self::Dusk => "Dusk Setting",
            Self::Evening => "Evening Sky",
        }
    }

    #[must_use]
    pub const fn for_hour(hour: u8) -> Self {
        match hour {
            0..=5 | 22.. => Self::Night,
            6..=7 => Self::Dawn,
            8..=11 => Self::Morning,
            12..=15 => Self::Noon,
            16..=17 => Self::Afternoon,
            18..=19 => Self::Dusk,
            20..=21 => Self::Evening,
        }
    }
}

#[must_use]
pub fn classify_simulated(clock: ClockTime) -> SimulatedPeriod {
    SimulatedPeriod::for_hour(clock.hour())
}

/// Sunrise/sunset windows win over the hour table; dawn is tested before dusk.
#[must_use]
pub fn classify_live(clock: ClockTime, astronomy: Option<&AstronomyInfo>) -> LivePeriod {
    if let Some(astro) = astronomy {
        let now = i32::from(clock.minutes_since_midnight());
        if within_twilight(now, astro.sunrise_minutes) {
            return LivePeriod::Dawn;
        }
        if within_twilight(now, astro.sunset_minutes) {
            return LivePeriod::Dusk;
        }
    }
    LivePeriod::for_hour(clock.hour())
}

fn within_twilight(now: i32, anchor: u16) -> bool {
    (now - i32::from(anchor)).abs() <= TWILIGHT_WINDOW_MINUTES
}
