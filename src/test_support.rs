use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::zip::ZipCode;

pub(crate) fn fixture_time(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 6, 1)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .expect("valid time fixture")
}

pub(crate) fn fixture_zip(value: &str) -> ZipCode {
    ZipCode::parse(value).expect("valid zip fixture")
}
