use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, de::DeserializeOwned};
use tracing::debug;

use crate::domain::{clock::AstronomyInfo, sky::WeatherObservation, zip::ZipCode};

pub const WEATHER_API_URL: &str = "https://api.weatherapi.com/v1";

#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl WeatherApiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(WEATHER_API_URL, api_key)
    }

    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("reqwest client"),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn fetch_current(&self, zip: &ZipCode) -> Result<WeatherObservation> {
        let payload: CurrentResponse = self
            .get_json(
                "current.json",
                zip,
                &[("q", zip.to_string()), ("aqi", "no".to_string())],
            )
            .await?;

        Ok(WeatherObservation {
            is_daytime: payload.current.is_day == 1,
            cloud_coverage_percent: payload.current.cloud.min(100) as u8,
            condition_text: payload.current.condition.text,
            condition_code: payload.current.condition.code,
            location_label: payload.location.label(),
        })
    }

    pub async fn fetch_astronomy(&self, zip: &ZipCode, date: NaiveDate) -> Result<AstronomyInfo> {
        let payload: AstronomyResponse = self
            .get_json(
                "astronomy.json",
                zip,
                &[
                    ("q", zip.to_string()),
                    ("dt", date.format("%Y-%m-%d").to_string()),
                ],
            )
            .await?;

        let astro = payload.astronomy.astro;
        AstronomyInfo::from_clock_strings(&astro.sunrise, &astro.sunset)
            .context("astronomy payload has unreadable sunrise/sunset times")
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        zip: &ZipCode,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}/{endpoint}", self.base_url);
        debug!(%url, %zip, "requesting weather data");
        let response = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .query(query)
            .send()
            .await
            .with_context(|| format!("{endpoint} request failed"))?;

        check_status(response, zip)?
            .json()
            .await
            .with_context(|| format!("failed to parse {endpoint} payload"))
    }
}

fn check_status(response: Response, zip: &ZipCode) -> Result<Response> {
    match response.status() {
        StatusCode::BAD_REQUEST => {
            bail!("invalid zip code {zip}: the weather service did not recognize it")
        }
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            bail!("weather API key was rejected; configure a WeatherAPI.com key")
        }
        _ => response
            .error_for_status()
            .context("weather request returned non-success status"),
    }
}

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    location: LocationBlock,
    current: CurrentBlock,
}

#[derive(Debug, Deserialize)]
struct LocationBlock {
    name: String,
    #[serde(default)]
    region: Option<String>,
}

impl LocationBlock {
    fn label(&self) -> String {
        match self.region.as_deref().filter(|region| !region.is_empty()) {
            Some(region) => format!("{}, {}", self.name, region),
            None => self.name.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CurrentBlock {
    is_day: u8,
    cloud: u32,
    condition: ConditionBlock,
}

#[derive(Debug, Deserialize)]
struct ConditionBlock {
    text: String,
    code: u16,
}

#[derive(Debug, Deserialize)]
struct AstronomyResponse {
    astronomy: AstronomyBlock,
}

#[derive(Debug, Deserialize)]
struct AstronomyBlock {
    astro: AstroBlock,
}

#[derive(Debug, Deserialize)]
struct AstroBlock {
    sunrise: String,
    sunset: String,
}
