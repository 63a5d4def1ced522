use super::period::{LivePeriod, SimulatedPeriod};

/// `"<period> - <condition>"`, e.g. `"Late Morning - Partly cloudy"`.
#[must_use]
pub fn live_description(period: LivePeriod, condition_text: &str) -> String {
    format!("{} - {}", period.label(), condition_text)
}

#[must_use]
pub fn simulated_description(period: SimulatedPeriod) -> String {
    period.label().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_description_joins_label_and_condition() {
        assert_eq!(
            live_description(LivePeriod::LateMorning, "Partly cloudy"),
            "Late Morning - Partly cloudy"
        );
        assert_eq!(
            live_description(LivePeriod::EarlyMorning, "Sunny"),
            "Morning - Sunny"
        );
    }

    #[test]
    fn simulated_description_ignores_weather() {
        assert_eq!(simulated_description(SimulatedPeriod::Dawn), "Dawn Breaking");
        assert_eq!(simulated_description(SimulatedPeriod::Noon), "Midday Sky");
    }
}
