//! Reconcile overrides with inferred input facts.

use std::path::{Path, PathBuf};

use imdgrid_dataset::{
    DataType, MAX_YEAR, MIN_YEAR, YearLength, is_gregorian_leap, is_simplified_leap,
};
use tracing::{debug, warn};

use crate::error::ResolveError;
use crate::infer::{DetectedType, InputInfo};
use crate::overrides::Overrides;

/// Input facts after validation: a concrete data type and a year that is
/// consistent with the day count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInput {
    path: PathBuf,
    data_type: DataType,
    length: YearLength,
    year: i32,
}

impl ResolvedInput {
    /// Absolute input path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    pub fn length(&self) -> YearLength {
        self.length
    }

    pub fn year(&self) -> i32 {
        self.year
    }
}

/// Validate inferred input facts against the caller's overrides.
///
/// Checks run in a fixed order and the first failure is returned:
///
/// 1. the effective type (override, else detected) must be concrete;
/// 2. a `rain` override needs a rainfall-sized file, and a temperature
///    override needs a temperature-sized file. A `mintemp` override on a
///    file named as max temperature (or the reverse) is accepted;
/// 3. a year must be known, from the override or the path;
/// 4. the year must lie in `MIN_YEAR..=MAX_YEAR`;
/// 5. 366-day files need a year divisible by four, 365-day files a year
///    that is not.
///
/// # Errors
///
/// Returns the [`ResolveError`] variant for the first failed check.
pub fn validate_input(
    info: &InputInfo,
    overrides: &Overrides,
) -> Result<ResolvedInput, ResolveError> {
    let detected = info.detected();
    let data_type = match overrides.data_type() {
        Some(t) => t,
        None => detected.data_type().ok_or(ResolveError::AmbiguousType)?,
    };

    let mismatch = match data_type {
        DataType::Rain => detected != DetectedType::Rain,
        DataType::MinTemp | DataType::MaxTemp => detected == DetectedType::Rain,
    };
    if mismatch {
        return Err(ResolveError::TypeMismatch {
            specified: data_type,
            detected,
        });
    }

    let (year, year_from_filename) = match overrides.year() {
        Some(y) => (y, false),
        None => (
            info.year().ok_or(ResolveError::MissingYear)?,
            info.year_from_filename(),
        ),
    };

    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(ResolveError::InvalidYear { year });
    }

    let length = info.length();
    if YearLength::expected_for(year) != length {
        return Err(ResolveError::LeapYearMismatch {
            path: info.path().to_path_buf(),
            days: length.days(),
            year,
            year_from_filename,
        });
    }
    if is_simplified_leap(year) != is_gregorian_leap(year) {
        warn!(
            year,
            days = length.days(),
            "year is treated as a leap year by the divisible-by-four rule \
             but not by the Gregorian calendar"
        );
    }

    debug!(%data_type, year, days = length.days(), "input validated");

    Ok(ResolvedInput {
        path: info.path().to_path_buf(),
        data_type,
        length,
        year,
    })
}
