//! Calendar month handling for monthly satellite products.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A calendar month, the native time step of NEO monthly products.
///
/// Serialized as the archive's "YYYY-MM" form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthId {
    year: i32,
    month: u32,
}

impl MonthId {
    /// Create a month id, rejecting month numbers outside 1..=12.
    pub fn new(year: i32, month: u32) -> Result<Self, ConfigError> {
        if !(1..=12).contains(&month) {
            return Err(ConfigError::InvalidMonth(format!(
                "month number {} is outside 1..=12",
                month
            )));
        }
        Ok(Self { year, month })
    }

    /// Parse the "YYYY-MM" form used in archive filenames.
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidMonth(format!("'{}' is not of the form YYYY-MM", s));

        let (year_part, month_part) = s.split_once('-').ok_or_else(invalid)?;
        if year_part.len() != 4 || month_part.len() != 2 {
            return Err(invalid());
        }

        let year: i32 = year_part.parse().map_err(|_| invalid())?;
        let month: u32 = month_part.parse().map_err(|_| invalid())?;
        Self::new(year, month)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The following calendar month.
    pub fn next(&self) -> MonthId {
        if self.month == 12 {
            MonthId {
                year: self.year + 1,
                month: 1,
            }
        } else {
            MonthId {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Consecutive months starting at `start`, `count` entries long.
    pub fn sequence(start: MonthId, count: usize) -> Vec<MonthId> {
        let mut months = Vec::with_capacity(count);
        let mut current = start;
        for _ in 0..count {
            months.push(current);
            current = current.next();
        }
        months
    }

    /// Chart axis label, e.g. "Sep 2024".
    pub fn label(&self) -> String {
        match NaiveDate::from_ymd_opt(self.year, self.month, 1) {
            Some(date) => date.format("%b %Y").to_string(),
            None => self.to_string(),
        }
    }

    /// First day of the month as "YYYY-MM-01".
    pub fn iso_date(&self) -> String {
        format!("{}-01", self)
    }

    /// Midnight UTC on the first day of the month.
    pub fn iso_timestamp(&self) -> String {
        format!("{}-01T00:00:00Z", self)
    }
}

impl fmt::Display for MonthId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for MonthId {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<MonthId> for String {
    fn from(month: MonthId) -> Self {
        month.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_month() {
        let month = MonthId::parse("2024-09").unwrap();
        assert_eq!(month.year(), 2024);
        assert_eq!(month.month(), 9);
        assert_eq!(month.to_string(), "2024-09");
    }

    #[test]
    fn test_parse_rejects_bad_forms() {
        assert!(MonthId::parse("2024-13").is_err());
        assert!(MonthId::parse("2024-00").is_err());
        assert!(MonthId::parse("202409").is_err());
        assert!(MonthId::parse("2024-9").is_err());
        assert!(MonthId::parse("september").is_err());
    }

    #[test]
    fn test_sequence_crosses_year_boundary() {
        let start = MonthId::parse("2024-09").unwrap();
        let months = MonthId::sequence(start, 12);

        assert_eq!(months.len(), 12);
        assert_eq!(months[0].to_string(), "2024-09");
        assert_eq!(months[3].to_string(), "2024-12");
        assert_eq!(months[4].to_string(), "2025-01");
        assert_eq!(months[11].to_string(), "2025-08");
    }

    #[test]
    fn test_label_and_iso_forms() {
        let month = MonthId::parse("2024-09").unwrap();
        assert_eq!(month.label(), "Sep 2024");
        assert_eq!(month.iso_date(), "2024-09-01");
        assert_eq!(month.iso_timestamp(), "2024-09-01T00:00:00Z");
    }

    #[test]
    fn test_ordering_is_chronological() {
        let a = MonthId::parse("2024-12").unwrap();
        let b = MonthId::parse("2025-01").unwrap();
        assert!(a < b);
    }
}
