use anyhow::Result;
use chrono::NaiveDateTime;
use tracing::{info, warn};

use crate::{
    app::settings::{API_KEY_ENV, Settings},
    cli::ModeArg,
    data::weatherapi::{WEATHER_API_URL, WeatherApiClient},
    domain::{
        sky::{SkyColorResult, compute_fallback, compute_live, compute_simulated},
        zip::ZipCode,
    },
};

/// Where a derived color came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    Live,
    Simulated,
    Fallback { reason: String },
}

impl Origin {
    #[must_use]
    pub fn is_live(&self) -> bool {
        matches!(self, Self::Live)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkyOutcome {
    pub result: SkyColorResult,
    pub origin: Origin,
}

#[derive(Debug, Clone)]
pub enum SkySource {
    Live(WeatherApiClient),
    /// Live mode was requested without a usable key.
    MissingKey,
    Simulated,
}

impl SkySource {
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        match settings.mode {
            ModeArg::Simulated => Self::Simulated,
            ModeArg::Live => match settings.api_key.as_deref().map(str::trim) {
                Some(key) if key.is_empty() => Self::MissingKey,
                Some(key) if settings.weather_url == WEATHER_API_URL => {
                    Self::Live(WeatherApiClient::new(key))
                }
                Some(key) => Self::Live(WeatherApiClient::with_base_url(
                    settings.weather_url.as_str(),
                    key,
                )),
                None => Self::MissingKey,
            },
        }
    }
}

/// Derives one sky color. Provider failures degrade to the simulated
/// fallback; only internal table errors surface as `Err`.
pub async fn acquire(source: &SkySource, zip: &ZipCode, now: NaiveDateTime) -> Result<SkyOutcome> {
    let client = match source {
        SkySource::Simulated => {
            return Ok(SkyOutcome {
                result: compute_simulated(zip.as_str(), now)?,
                origin: Origin::Simulated,
            });
        }
        SkySource::MissingKey => {
            let reason = format!("no weather API key configured (set {API_KEY_ENV} or --api-key)");
            warn!(%zip, "{reason}");
            return fallback(zip, now, reason);
        }
        SkySource::Live(client) => client,
    };

    let (current, astronomy) = tokio::join!(
        client.fetch_current(zip),
        client.fetch_astronomy(zip, now.date())
    );

    let observation = match current {
        Ok(observation) => observation,
        Err(err) => {
            warn!(%zip, error = %format!("{err:#}"), "current conditions unavailable");
            return fallback(zip, now, format!("{err:#}"));
        }
    };

    let astronomy = astronomy
        .inspect_err(|err| {
            warn!(%zip, error = %format!("{err:#}"), "astronomy unavailable; using hour buckets");
        })
        .ok();

    let result = compute_live(&observation, astronomy.as_ref(), now)?;
    info!(%zip, primary = %result.primary_color, "derived live sky color");
    Ok(SkyOutcome {
        result,
        origin: Origin::Live,
    })
}

fn fallback(zip: &ZipCode, now: NaiveDateTime, reason: String) -> Result<SkyOutcome> {
    Ok(SkyOutcome {
        result: compute_fallback(zip.as_str(), now)?,
        origin: Origin::Fallback { reason },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::sky::{FALLBACK_LABEL, SIMULATED_LABEL},
        test_support::{fixture_time as at, fixture_zip},
    };

    fn zip() -> ZipCode {
        fixture_zip("10001")
    }

    #[test]
    fn source_follows_mode_and_key() {
        let simulated = Settings {
            mode: ModeArg::Simulated,
            api_key: Some("key".to_string()),
            ..Settings::default()
        };
        assert!(matches!(SkySource::from_settings(&simulated), SkySource::Simulated));

        let keyless = Settings::default();
        assert!(matches!(SkySource::from_settings(&keyless), SkySource::MissingKey));

        let blank = Settings {
            api_key: Some("   ".to_string()),
            ..Settings::default()
        };
        assert!(matches!(SkySource::from_settings(&blank), SkySource::MissingKey));

        let live = Settings {
            api_key: Some("key".to_string()),
            ..Settings::default()
        };
        match SkySource::from_settings(&live) {
            SkySource::Live(client) => assert_eq!(client.base_url(), WEATHER_API_URL),
            other => panic!("expected live source, got {other:?}"),
        }

        let mirrored = Settings {
            api_key: Some("key".to_string()),
            weather_url: "http://localhost:8080/v1/".to_string(),
            ..Settings::default()
        };
        match SkySource::from_settings(&mirrored) {
            SkySource::Live(client) => assert_eq!(client.base_url(), "http://localhost:8080/v1"),
            other => panic!("expected live source, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn simulated_source_never_touches_network() {
        let outcome = acquire(&SkySource::Simulated, &zip(), at(9, 15))
            .await
            .expect("simulated outcome");
        assert_eq!(outcome.origin, Origin::Simulated);
        assert_eq!(outcome.result.source_location_label, SIMULATED_LABEL);
        assert_eq!(outcome.result.primary_color.to_string(), "#8dd4ff");
    }

    #[tokio::test]
    async fn missing_key_falls_back() {
        let outcome = acquire(&SkySource::MissingKey, &zip(), at(9, 15))
            .await
            .expect("fallback outcome");
        assert!(matches!(outcome.origin, Origin::Fallback { .. }));
        assert!(!outcome.origin.is_live());
        assert_eq!(outcome.result.source_location_label, FALLBACK_LABEL);
        assert_eq!(outcome.result.primary_color.to_string(), "#8dd4ff");
    }
}
