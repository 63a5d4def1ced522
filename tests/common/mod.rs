#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use sky_color::domain::{sky::WeatherObservation, zip::ZipCode};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

pub const TEST_KEY: &str = "test-key";

pub fn at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 6, 1)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .expect("valid time fixture")
}

pub fn zip(value: &str) -> ZipCode {
    ZipCode::parse(value).expect("valid zip fixture")
}

pub fn observation(cloud: u8, condition: &str) -> WeatherObservation {
    WeatherObservation {
        is_daytime: true,
        cloud_coverage_percent: cloud,
        condition_text: condition.to_string(),
        condition_code: 1000,
        location_label: "New York, New York".to_string(),
    }
}

pub fn current_body(cloud: u32, condition: &str) -> String {
    serde_json::json!({
        "location": {"name": "New York", "region": "New York", "country": "USA"},
        "current": {
            "is_day": 1,
            "cloud": cloud,
            "temp_f": 71.2,
            "condition": {"text": condition, "icon": "//cdn.weatherapi.com/113.png", "code": 1000}
        }
    })
    .to_string()
}

pub fn astronomy_body(sunrise: &str, sunset: &str) -> String {
    serde_json::json!({
        "location": {"name": "New York", "region": "New York"},
        "astronomy": {"astro": {"sunrise": sunrise, "sunset": sunset, "moon_phase": "Full Moon"}}
    })
    .to_string()
}

pub async fn mount_json(server: &MockServer, endpoint: &str, status: u16, body: String) {
    Mock::given(method("GET"))
        .and(path(format!("/{endpoint}")))
        .and(query_param("key", TEST_KEY))
        .respond_with(ResponseTemplate::new(status).set_body_raw(body, "application/json"))
        .mount(server)
        .await;
}
