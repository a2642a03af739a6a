//! Year lengths and the leap rule used to validate them.

use chrono::NaiveDate;

/// Earliest year accepted for input data.
pub const MIN_YEAR: i32 = 1900;

/// Latest year accepted for input data.
pub const MAX_YEAR: i32 = 2100;

/// Number of daily records in a GRD file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YearLength {
    /// 365 daily records.
    Common,
    /// 366 daily records.
    Leap,
}

impl YearLength {
    /// Returns the number of days (365 or 366).
    pub fn days(self) -> usize {
        match self {
            Self::Common => 365,
            Self::Leap => 366,
        }
    }

    /// The length a file for `year` must have under [`is_simplified_leap`].
    pub fn expected_for(year: i32) -> Self {
        if is_simplified_leap(year) {
            Self::Leap
        } else {
            Self::Common
        }
    }
}

/// Divisible-by-four leap rule applied to GRD day counts.
///
/// Century years are not special-cased, so 1900 and 2100 count as leap years
/// here.
pub fn is_simplified_leap(year: i32) -> bool {
    year % 4 == 0
}

/// Full proleptic Gregorian leap rule.
pub fn is_gregorian_leap(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}
