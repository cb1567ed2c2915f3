use chrono::{Datelike, NaiveDate};

use super::DateValue;

/// Error arising when building a `DateRange` from user configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RangeError {
    #[error("\"{0}\" is not a date in YYYYMMDD form")]
    Malformed(String),
    #[error("\"{0}\" is not a valid calendar date")]
    InvalidDate(String),
    #[error("range start {start} is after range end {end}")]
    Inverted { start: u32, end: u32 },
}

/// An inclusive range of packed `yyyymmdd` dates.
///
/// Membership is a plain integer comparison, not a calendar-aware one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: u32,
    end: u32,
}

impl DateRange {
    /// Build a range from two packed dates, rejecting `start > end`.
    pub fn new(start: u32, end: u32) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::Inverted { start, end });
        }
        Ok(Self { start, end })
    }

    /// Parse both bounds from `YYYYMMDD` strings.
    ///
    /// Unlike the membership test, the bounds themselves have to be real calendar dates.
    pub fn parse(start: &str, end: &str) -> Result<Self, RangeError> {
        Self::new(parse_bound(start)?, parse_bound(end)?)
    }

    #[inline]
    pub fn contains(&self, date: &DateValue) -> bool {
        (self.start..=self.end).contains(&date.packed())
    }
}

fn parse_bound(value: &str) -> Result<u32, RangeError> {
    let value = value.trim();
    if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RangeError::Malformed(value.to_owned()));
    }
    let date = NaiveDate::parse_from_str(value, "%Y%m%d")
        .map_err(|_| RangeError::InvalidDate(value.to_owned()))?;
    Ok(date.year() as u32 * 10_000 + date.month() * 100 + date.day())
}
