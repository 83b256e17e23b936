//! Time types and day count conventions for financial calculations.
//!
//! This module provides:
//! - `Date`: Type-safe date wrapper around chrono::NaiveDate
//! - `DayCountConvention`: Industry-standard day count conventions
//! - Year fraction calculations for financial instruments
//!
//! # Examples
//!
//! ```
//! use sensi_core::types::time::{Date, DayCountConvention};
//!
//! let start = Date::from_ymd(2020, 2, 28).unwrap();
//! let end = Date::from_ymd(2024, 2, 29).unwrap();
//!
//! // Calculate year fraction using ACT/360
//! let yf = DayCountConvention::Act360.year_fraction(start, end);
//! assert!((yf - 1462.0 / 360.0).abs() < 1e-12);
//! ```

use chrono::{Datelike, NaiveDate, Weekday};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// Provides ISO 8601 parsing and the date arithmetic needed for
/// valuation-date handling: calendar-day offsets and weekend rolling.
///
/// # Examples
///
/// ```
/// use sensi_core::types::time::Date;
///
/// let date = Date::from_ymd(2020, 2, 28).unwrap();
/// assert_eq!(date.year(), 2020);
///
/// // Parse from ISO 8601 string
/// let parsed: Date = "2020-02-28".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// // Calendar-day arithmetic
/// let next = date.add_days(1);
/// assert_eq!(next.day(), 29); // 2020 is a leap year
///
/// // Days between dates
/// assert_eq!(next - date, 1);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Arguments
    /// * `year` - Year (e.g., 2020)
    /// * `month` - Month (1-12)
    /// * `day` - Day (1-31, depending on month)
    ///
    /// # Returns
    /// `Ok(Date)` if the date is valid, `Err(DateError::InvalidDate)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use sensi_core::types::time::Date;
    ///
    /// let leap = Date::from_ymd(2024, 2, 29).unwrap();
    /// assert_eq!(leap.month(), 2);
    ///
    /// let invalid = Date::from_ymd(2023, 2, 29);
    /// assert!(invalid.is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    ///
    /// # Examples
    ///
    /// ```
    /// use sensi_core::types::time::Date;
    ///
    /// let date = Date::parse("2024-02-29").unwrap();
    /// assert_eq!(date.year(), 2024);
    ///
    /// assert!(Date::parse("not-a-date").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(e.to_string()))
    }

    /// Returns the underlying NaiveDate.
    ///
    /// Use this method when you need access to chrono's full API.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the date shifted by the given number of calendar days.
    ///
    /// Negative offsets shift backwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use sensi_core::types::time::Date;
    ///
    /// let d = Date::from_ymd(2020, 2, 28).unwrap();
    /// assert_eq!(d.add_days(2), Date::from_ymd(2020, 3, 1).unwrap());
    /// assert_eq!(d.add_days(-28), Date::from_ymd(2020, 1, 31).unwrap());
    /// ```
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Rolls the date forward to the next weekday.
    ///
    /// Saturdays and Sundays advance to the following Monday; weekdays are
    /// returned unchanged. Used as the reference-date convention for flat
    /// curves and volatilities quoted off the valuation date.
    ///
    /// # Examples
    ///
    /// ```
    /// use sensi_core::types::time::Date;
    ///
    /// // Saturday 2020-02-29 rolls to Monday 2020-03-02
    /// let sat = Date::from_ymd(2020, 2, 29).unwrap();
    /// assert_eq!(sat.next_weekday(), Date::from_ymd(2020, 3, 2).unwrap());
    ///
    /// // Friday stays put
    /// let fri = Date::from_ymd(2020, 2, 28).unwrap();
    /// assert_eq!(fri.next_weekday(), fri);
    /// ```
    pub fn next_weekday(&self) -> Self {
        let mut d = self.0;
        while matches!(d.weekday(), Weekday::Sat | Weekday::Sun) {
            d += chrono::Duration::days(1);
        }
        Date(d)
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    ///
    /// The result is positive if `self` is after `other`, negative otherwise.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Date::parse(s)
    }
}

/// Day count conventions for year fraction calculations.
///
/// # Variants
/// - `Act365`: Actual days / 365 (standard for derivatives)
/// - `Act360`: Actual days / 360 (money market instruments)
///
/// # Usage
///
/// ```
/// use sensi_core::types::time::{Date, DayCountConvention};
///
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// let end = Date::from_ymd(2024, 7, 1).unwrap();
///
/// let yf = DayCountConvention::Act365.year_fraction(start, end);
/// assert!((yf - 182.0 / 365.0).abs() < 1e-12);
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DayCountConvention {
    /// Actual/365 Fixed: actual_days / 365.0
    Act365,

    /// Actual/360: actual_days / 360.0
    Act360,
}

impl DayCountConvention {
    /// Get the market name of this convention.
    ///
    /// # Examples
    ///
    /// ```
    /// use sensi_core::types::time::DayCountConvention;
    ///
    /// assert_eq!(DayCountConvention::Act365.name(), "ACT/365");
    /// assert_eq!(DayCountConvention::Act360.name(), "ACT/360");
    /// ```
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::Act365 => "ACT/365",
            DayCountConvention::Act360 => "ACT/360",
        }
    }

    /// Calculate the year fraction between two dates.
    ///
    /// Negative if `end` precedes `start`.
    pub fn year_fraction(&self, start: Date, end: Date) -> f64 {
        let days = (end - start) as f64;
        match self {
            DayCountConvention::Act365 => days / 365.0,
            DayCountConvention::Act360 => days / 360.0,
        }
    }
}

impl fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
