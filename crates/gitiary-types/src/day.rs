//! Calendar-day and month keys.
//!
//! Both keys serialize to their zero-padded string form (`YYYY-MM-DD`,
//! `YYYY-MM`). Their `Ord` agrees with lexicographic ordering of that form,
//! so sorting typed keys and sorting the strings give the same sequence.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::macros::format_description;
use time::{Date, Month};

/// A single calendar day (no time zone, no time of day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(Date);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid day `{input}`: expected YYYY-MM-DD")]
pub struct DayParseError {
    pub input: String,
}

impl Day {
    /// Build a day from calendar components, `None` if they don't name a real date.
    #[must_use]
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Option<Self> {
        let month = Month::try_from(month).ok()?;
        Date::from_calendar_date(year, month, day).ok().map(Self)
    }

    #[must_use]
    pub const fn from_date(date: Date) -> Self {
        Self(date)
    }

    #[must_use]
    pub const fn date(self) -> Date {
        self.0
    }

    #[must_use]
    pub const fn year(self) -> i32 {
        self.0.year()
    }

    #[must_use]
    pub fn month_key(self) -> MonthKey {
        MonthKey {
            year: self.0.year(),
            month: u8::from(self.0.month()),
        }
    }
}

impl FromStr for Day {
    type Err = DayParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || DayParseError {
            input: s.to_string(),
        };
        if s.len() != 10 {
            return Err(err());
        }
        let format = format_description!("[year]-[month]-[day]");
        Date::parse(s, format).map(Self).map_err(|_| err())
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            u8::from(self.0.month()),
            self.0.day()
        )
    }
}

impl Serialize for Day {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Day {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A calendar month, used as the grouping key for monthly rollups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid month `{input}`: expected YYYY-MM")]
pub struct MonthKeyParseError {
    pub input: String,
}

impl MonthKey {
    #[must_use]
    pub fn new(year: i32, month: u8) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    #[must_use]
    pub const fn month(self) -> u8 {
        self.month
    }
}

impl FromStr for MonthKey {
    type Err = MonthKeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || MonthKeyParseError {
            input: s.to_string(),
        };
        let (year, month) = s.split_once('-').ok_or_else(err)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(err());
        }
        if !year.bytes().chain(month.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(err());
        }
        let year: i32 = year.parse().map_err(|_| err())?;
        let month: u8 = month.parse().map_err(|_| err())?;
        Self::new(year, month).ok_or_else(err)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_parses_and_formats_zero_padded() {
        let day: Day = "2026-01-05".parse().unwrap();
        assert_eq!(day.year(), 2026);
        assert_eq!(day.to_string(), "2026-01-05");
    }

    #[test]
    fn day_rejects_unpadded_and_impossible_dates() {
        assert!("2026-1-05".parse::<Day>().is_err());
        assert!("2026-02-30".parse::<Day>().is_err());
        assert!("2026-01-05T00:00:00Z".parse::<Day>().is_err());
        assert!("".parse::<Day>().is_err());
    }

    #[test]
    fn day_ordering_matches_string_ordering() {
        let mut days: Vec<Day> = ["2026-02-01", "2025-12-31", "2026-01-15"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        days.sort();
        let rendered: Vec<String> = days.iter().map(Day::to_string).collect();
        assert_eq!(rendered, vec!["2025-12-31", "2026-01-15", "2026-02-01"]);
    }

    #[test]
    fn month_key_derives_from_day() {
        let day: Day = "2026-03-09".parse().unwrap();
        assert_eq!(day.month_key().to_string(), "2026-03");
        assert_eq!(day.month_key().year(), 2026);
    }

    #[test]
    fn month_key_rejects_out_of_range_month() {
        assert!("2026-13".parse::<MonthKey>().is_err());
        assert!("2026-00".parse::<MonthKey>().is_err());
        assert!("26-01".parse::<MonthKey>().is_err());
        assert!("2026-+1".parse::<MonthKey>().is_err());
    }
}
