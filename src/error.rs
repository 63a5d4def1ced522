use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    HexColor,
    TimeOfDay,
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HexColor => f.write_str("hex color"),
            Self::TimeOfDay => f.write_str("time of day"),
        }
    }
}

/// Failures raised by the color-derivation core.
///
/// `Format` is always a caller or data bug. `Invariant` means a lookup table
/// is missing an entry the classifier can produce, which is a programming
/// defect.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkyError {
    #[error("malformed {kind}: {input:?}")]
    Format { kind: FormatKind, input: String },
    #[error("invariant violated: {0}")]
    Invariant(String),
}

impl SkyError {
    pub(crate) fn hex(input: &str) -> Self {
        Self::Format {
            kind: FormatKind::HexColor,
            input: input.to_string(),
        }
    }

    pub(crate) fn time_of_day(input: &str) -> Self {
        Self::Format {
            kind: FormatKind::TimeOfDay,
            input: input.to_string(),
        }
    }

    #[must_use]
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format { .. })
    }
}
