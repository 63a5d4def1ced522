use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

static ZIP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}(-[0-9]{4})?$").expect("zip pattern compiles"));

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid US zip code {0:?}: expected 5 digits or ZIP+4, e.g. 10001 or 10001-1234")]
pub struct InvalidZipCode(String);

/// A US zip code in `12345` or `12345-6789` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ZipCode(String);

impl ZipCode {
    pub fn parse(value: &str) -> Result<Self, InvalidZipCode> {
        let trimmed = value.trim();
        if ZIP_PATTERN.is_match(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(InvalidZipCode(value.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ZipCode {
    type Err = InvalidZipCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ZipCode {
    type Error = InvalidZipCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ZipCode> for String {
    fn from(zip: ZipCode) -> Self {
        zip.0
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
