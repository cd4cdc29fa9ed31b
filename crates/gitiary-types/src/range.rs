//! Lookback window catalog.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A caller-selected lookback window anchored to a reference day.
///
/// Serializes as a JSON number for the fixed windows and as `"all"` for the
/// unbounded sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "RangeRepr", into = "RangeRepr")]
pub enum DateRange {
    Days7,
    Days30,
    #[default]
    Days90,
    Days180,
    Days360,
    All,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported range `{input}`: expected one of 7, 30, 90, 180, 360, all")]
pub struct RangeParseError {
    pub input: String,
}

impl DateRange {
    /// The bounded windows, shortest first.
    pub const WINDOWS: [DateRange; 5] = [
        DateRange::Days7,
        DateRange::Days30,
        DateRange::Days90,
        DateRange::Days180,
        DateRange::Days360,
    ];

    /// Window length in days, `None` for [`DateRange::All`].
    #[must_use]
    pub const fn days(self) -> Option<u32> {
        match self {
            DateRange::Days7 => Some(7),
            DateRange::Days30 => Some(30),
            DateRange::Days90 => Some(90),
            DateRange::Days180 => Some(180),
            DateRange::Days360 => Some(360),
            DateRange::All => None,
        }
    }

    #[must_use]
    pub fn from_days(days: u32) -> Option<Self> {
        Self::WINDOWS.into_iter().find(|r| r.days() == Some(days))
    }

    #[must_use]
    pub fn label(self) -> String {
        match self.days() {
            Some(days) => format!("{days} days"),
            None => "All time".to_string(),
        }
    }

    /// Request-layer parsing: missing or `all` means unbounded, a catalog
    /// number selects that window, anything else falls back to the default.
    #[must_use]
    pub fn parse_lenient(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") | Some("all") => DateRange::All,
            Some(value) => value
                .parse::<u32>()
                .ok()
                .and_then(Self::from_days)
                .unwrap_or_default(),
        }
    }
}

impl FromStr for DateRange {
    type Err = RangeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(DateRange::All);
        }
        trimmed
            .parse::<u32>()
            .ok()
            .and_then(Self::from_days)
            .ok_or_else(|| RangeParseError {
                input: s.to_string(),
            })
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.days() {
            Some(days) => write!(f, "{days}"),
            None => f.write_str("all"),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RangeRepr {
    Days(u32),
    Text(String),
}

impl TryFrom<RangeRepr> for DateRange {
    type Error = RangeParseError;

    fn try_from(repr: RangeRepr) -> Result<Self, Self::Error> {
        match repr {
            RangeRepr::Days(days) => Self::from_days(days).ok_or_else(|| RangeParseError {
                input: days.to_string(),
            }),
            RangeRepr::Text(text) => text.parse(),
        }
    }
}

impl From<DateRange> for RangeRepr {
    fn from(range: DateRange) -> Self {
        match range.days() {
            Some(days) => RangeRepr::Days(days),
            None => RangeRepr::Text("all".to_string()),
        }
    }
}
