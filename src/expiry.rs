//! Card expiry date validation.
//!
//! The issue date printed on a card names the last month it can be used. A
//! card stays valid through the last calendar day of that month (UTC).
//!
//! # Supported Formats
//!
//! - `MM/YY` - e.g., "12/25" (read as 2025)
//! - `MM/YYYY` - e.g., "12/2025"
//!
//! The month must be zero-padded and the `/` separator is required.
//!
//! # Example
//!
//! ```
//! use card_validation::expiry::{parse_expiry, validate_issue_date};
//!
//! let expiry = parse_expiry("02/28").unwrap();
//! assert_eq!(expiry.month(), 2);
//! assert_eq!(expiry.year(), 2028);
//! assert_eq!(expiry.last_day().to_string(), "2028-02-29");
//!
//! assert!(validate_issue_date("12/2099"));
//! assert!(!validate_issue_date("01/20"));
//! assert!(!validate_issue_date("1225"));
//! ```

use std::fmt;

use chrono::{DateTime, Datelike, Months, NaiveDate, Utc};
use thiserror::Error;

/// A parsed expiry date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExpiryDate {
    /// Month (1-12)
    month: u8,
    /// Four-digit year (e.g., 2025)
    year: u16,
    /// Last calendar day of the month
    last_day: NaiveDate,
}

impl ExpiryDate {
    /// Creates a new expiry date.
    ///
    /// Returns `None` if the month is invalid (not 1-12).
    pub fn new(month: u8, year: u16) -> Option<Self> {
        if !(1..=12).contains(&month) {
            return None;
        }
        let last_day = NaiveDate::from_ymd_opt(i32::from(year), u32::from(month), 1)?
            .checked_add_months(Months::new(1))?
            .pred_opt()?;
        Some(Self {
            month,
            year,
            last_day,
        })
    }

    /// Returns the month (1-12).
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the four-digit year.
    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns the last day the card can be used.
    #[inline]
    pub const fn last_day(&self) -> NaiveDate {
        self.last_day
    }

    /// Returns true if the card has expired as of `now`.
    ///
    /// The whole expiry month is still valid.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.date_naive() > self.last_day
    }

    /// Returns true if the card has expired.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Returns the number of whole months after the current one the card
    /// remains valid for. Returns 0 if expired or expiring this month.
    pub fn months_until_expiry_at(&self, now: DateTime<Utc>) -> u32 {
        let expiry_months = i64::from(self.year) * 12 + i64::from(self.month);
        let current_months = i64::from(now.year()) * 12 + i64::from(now.month());

        u32::try_from(expiry_months - current_months).unwrap_or(0)
    }

    /// Formats as MM/YY.
    pub fn format_short(&self) -> String {
        format!("{:02}/{:02}", self.month, self.year % 100)
    }

    /// Formats as MM/YYYY.
    pub fn format_long(&self) -> String {
        format!("{:02}/{:04}", self.month, self.year)
    }
}

impl fmt::Display for ExpiryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}", self.month, self.year % 100)
    }
}

/// Errors that can occur during expiry date parsing/validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpiryError {
    /// The input string is empty.
    #[error("expiry date is empty")]
    Empty,

    /// Invalid format - couldn't parse month/year.
    #[error("invalid expiry format (expected MM/YY or MM/YYYY)")]
    InvalidFormat,

    /// Month is out of range (must be 1-12).
    #[error("invalid month {0}: must be 01-12")]
    InvalidMonth(u8),

    /// The expiry month is already over.
    #[error("card expired ({month:02}/{year})")]
    Expired {
        /// The expiry month.
        month: u8,
        /// The expiry year.
        year: u16,
    },
}

/// Returns the value of an all-digit field of the given width.
fn fixed_width_number(field: &str, width: usize) -> Option<u16> {
    if field.len() != width || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

/// Parses an expiry date string without checking it against the clock.
///
/// # Example
///
/// ```
/// use card_validation::expiry::{parse_expiry, ExpiryError};
///
/// let expiry = parse_expiry("01/2030").unwrap();
/// assert_eq!(expiry.year(), 2030);
///
/// assert_eq!(parse_expiry("13/25"), Err(ExpiryError::InvalidMonth(13)));
/// assert_eq!(parse_expiry("12-25"), Err(ExpiryError::InvalidFormat));
/// ```
pub fn parse_expiry(input: &str) -> Result<ExpiryDate, ExpiryError> {
    if input.is_empty() {
        return Err(ExpiryError::Empty);
    }

    let (month_str, year_str) = input.split_once('/').ok_or(ExpiryError::InvalidFormat)?;

    let month = fixed_width_number(month_str, 2).ok_or(ExpiryError::InvalidFormat)?;
    let year = match year_str.len() {
        2 => fixed_width_number(year_str, 2).map(|yy| 2000 + yy),
        4 => fixed_width_number(year_str, 4),
        _ => None,
    }
    .ok_or(ExpiryError::InvalidFormat)?;

    // Two digits never exceed 99
    let month = month as u8;
    if !(1..=12).contains(&month) {
        return Err(ExpiryError::InvalidMonth(month));
    }

    ExpiryDate::new(month, year).ok_or(ExpiryError::InvalidFormat)
}

/// Parses an expiry date and rejects it if it is over as of `now`.
pub fn validate_expiry_at(input: &str, now: DateTime<Utc>) -> Result<ExpiryDate, ExpiryError> {
    let expiry = parse_expiry(input)?;

    if expiry.is_expired_at(now) {
        return Err(ExpiryError::Expired {
            month: expiry.month,
            year: expiry.year,
        });
    }

    Ok(expiry)
}

/// Parses an expiry date and rejects it if it is already over.
///
/// # Example
///
/// ```
/// use card_validation::expiry::{validate_expiry, ExpiryError};
///
/// assert!(validate_expiry("12/2099").is_ok());
/// assert!(matches!(validate_expiry("01/20"), Err(ExpiryError::Expired { .. })));
/// ```
pub fn validate_expiry(input: &str) -> Result<ExpiryDate, ExpiryError> {
    validate_expiry_at(input, Utc::now())
}

/// Checks if an issue date is well-formed and not expired as of `now`.
#[inline]
pub fn validate_issue_date_at(input: &str, now: DateTime<Utc>) -> bool {
    validate_expiry_at(input, now).is_ok()
}

/// Checks if an issue date is well-formed and not expired.
#[inline]
pub fn validate_issue_date(input: &str) -> bool {
    validate_issue_date_at(input, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, hour, 59, 59).unwrap()
    }

    #[test]
    fn test_parse_mm_yy() {
        let expiry = parse_expiry("12/25").unwrap();
        assert_eq!(expiry.month(), 12);
        assert_eq!(expiry.year(), 2025);
    }

    #[test]
    fn test_parse_mm_yyyy() {
        let expiry = parse_expiry("01/2030").unwrap();
        assert_eq!(expiry.month(), 1);
        assert_eq!(expiry.year(), 2030);
    }

    #[test]
    fn test_separator_required() {
        assert_eq!(parse_expiry("1225"), Err(ExpiryError::InvalidFormat));
        assert_eq!(parse_expiry("122025"), Err(ExpiryError::InvalidFormat));
        assert_eq!(parse_expiry("12-25"), Err(ExpiryError::InvalidFormat));
    }

    #[test]
    fn test_invalid_formats() {
        assert_eq!(parse_expiry(""), Err(ExpiryError::Empty));
        assert_eq!(parse_expiry("abc"), Err(ExpiryError::InvalidFormat));
        assert_eq!(parse_expiry("1/25"), Err(ExpiryError::InvalidFormat));
        assert_eq!(parse_expiry("12/025"), Err(ExpiryError::InvalidFormat));
        assert_eq!(parse_expiry("12/5"), Err(ExpiryError::InvalidFormat));
        assert_eq!(parse_expiry("12/2/5"), Err(ExpiryError::InvalidFormat));
        assert_eq!(parse_expiry(" 12/25"), Err(ExpiryError::InvalidFormat));
        assert_eq!(parse_expiry("12/25 "), Err(ExpiryError::InvalidFormat));
        assert_eq!(parse_expiry("+1/25"), Err(ExpiryError::InvalidFormat));
    }

    #[test]
    fn test_invalid_month() {
        assert_eq!(parse_expiry("00/25"), Err(ExpiryError::InvalidMonth(0)));
        assert_eq!(parse_expiry("13/25"), Err(ExpiryError::InvalidMonth(13)));
        assert_eq!(parse_expiry("99/2025"), Err(ExpiryError::InvalidMonth(99)));
    }

    #[test]
    fn test_last_day_respects_calendar() {
        assert_eq!(
            parse_expiry("02/24").unwrap().last_day(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert_eq!(
            parse_expiry("02/2023").unwrap().last_day(),
            NaiveDate::from_ymd_opt(2023, 2, 28).unwrap()
        );
        assert_eq!(
            parse_expiry("04/30").unwrap().last_day(),
            NaiveDate::from_ymd_opt(2030, 4, 30).unwrap()
        );
        assert_eq!(
            parse_expiry("12/2099").unwrap().last_day(),
            NaiveDate::from_ymd_opt(2099, 12, 31).unwrap()
        );
    }

    #[test]
    fn test_current_month_is_valid() {
        let now = at(2025, 6, 1, 0);
        assert!(validate_issue_date_at("06/25", now));
        assert!(validate_issue_date_at("06/2025", now));

        // Through the very end of the last day
        assert!(validate_issue_date_at("06/25", at(2025, 6, 30, 23)));
    }

    #[test]
    fn test_past_month_is_expired() {
        let now = at(2025, 7, 1, 0);
        assert_eq!(
            validate_expiry_at("06/25", now),
            Err(ExpiryError::Expired {
                month: 6,
                year: 2025
            })
        );
        assert!(!validate_issue_date_at("12/24", now));
        assert!(!validate_issue_date_at("01/20", now));
    }

    #[test]
    fn test_future_month_is_valid() {
        let now = at(2025, 6, 15, 12);
        assert!(validate_issue_date_at("07/25", now));
        assert!(validate_issue_date_at("01/2030", now));
    }

    #[test]
    fn test_leap_day_boundary() {
        assert!(validate_issue_date_at("02/24", at(2024, 2, 29, 23)));
        assert!(!validate_issue_date_at("02/24", at(2024, 3, 1, 0)));
    }

    #[test]
    fn test_format() {
        let expiry = ExpiryDate::new(3, 2025).unwrap();
        assert_eq!(expiry.format_short(), "03/25");
        assert_eq!(expiry.format_long(), "03/2025");
        assert_eq!(expiry.to_string(), "03/25");
    }

    #[test]
    fn test_expiry_date_new() {
        assert!(ExpiryDate::new(1, 2025).is_some());
        assert!(ExpiryDate::new(12, 2025).is_some());
        assert!(ExpiryDate::new(0, 2025).is_none());
        assert!(ExpiryDate::new(13, 2025).is_none());
    }

    #[test]
    fn test_months_until_expiry() {
        let now = at(2025, 6, 15, 12);
        assert_eq!(ExpiryDate::new(6, 2025).unwrap().months_until_expiry_at(now), 0);
        assert_eq!(ExpiryDate::new(8, 2026).unwrap().months_until_expiry_at(now), 14);
        assert_eq!(ExpiryDate::new(1, 2020).unwrap().months_until_expiry_at(now), 0);
    }

    #[test]
    fn test_is_expired_with_system_clock() {
        assert!(ExpiryDate::new(1, 2020).unwrap().is_expired());
        assert!(!ExpiryDate::new(12, 2099).unwrap().is_expired());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ExpiryError::Expired { month: 1, year: 2020 }.to_string(),
            "card expired (01/2020)"
        );
        assert!(ExpiryError::InvalidFormat.to_string().contains("MM/YY"));
    }
}
