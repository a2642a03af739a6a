//! Error types for imdgrid-resolve.

use std::path::PathBuf;

use imdgrid_dataset::{DataType, MAX_YEAR, MIN_YEAR};

use crate::infer::DetectedType;

/// Error type for inference, validation and output resolution.
///
/// Every variant is fatal for the conversion; none is retried.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// Returned when the input path does not exist.
    #[error("input file does not exist: {}", path.display())]
    MissingInput {
        /// Path as supplied by the caller.
        path: PathBuf,
    },

    /// Returned when the input file's metadata cannot be read.
    #[error("cannot read metadata of {}: {source}", path.display())]
    Metadata {
        /// Path that was inspected.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// Returned when the input size matches none of the legal GRD sizes.
    #[error("invalid input file size: {size} bytes in {}", path.display())]
    InvalidSize {
        /// Path that was inspected.
        path: PathBuf,
        /// Size in bytes.
        size: u64,
    },

    /// Returned for temperature data whose file name does not say whether it
    /// holds minimum or maximum temperatures, when no type was given.
    #[error(
        "temperature data detected, but can not detect whether it is min or max data; \
         try specifying data type with the -t option"
    )]
    AmbiguousType,

    /// Returned when the requested type contradicts the size-detected type.
    #[error("specified data type: {specified} does not match detected data type: {detected}")]
    TypeMismatch {
        /// Type requested by the caller.
        specified: DataType,
        /// Type detected from the input file.
        detected: DetectedType,
    },

    /// Returned when no year was given and none could be read from the path.
    #[error("please specify a year for the input data (-y)")]
    MissingYear,

    /// Returned when the year lies outside the accepted range.
    #[error("invalid year specified: {year} (must be {}..={})", MIN_YEAR, MAX_YEAR)]
    InvalidYear {
        /// The rejected year.
        year: i32,
    },

    /// Returned when the day count disagrees with the divisible-by-four leap
    /// rule for the resolved year.
    #[error(
        "data file {} contains data for {days} days; year {year} {}{}",
        path.display(),
        leap_phrase(*days),
        year_hint(*year_from_filename)
    )]
    LeapYearMismatch {
        /// Absolute input path.
        path: PathBuf,
        /// Day count derived from the file size.
        days: usize,
        /// Resolved year.
        year: i32,
        /// Whether the year was read from the file name.
        year_from_filename: bool,
    },

    /// Returned when the output exists and overwriting was not requested.
    #[error("output file: {} exists. Use -c option to overwrite", path.display())]
    OutputExists {
        /// Resolved output path.
        path: PathBuf,
    },
}

fn leap_phrase(days: usize) -> &'static str {
    if days == 366 {
        "does not appear to be a leap year"
    } else {
        "appears to be a leap year"
    }
}

fn year_hint(year_from_filename: bool) -> &'static str {
    if year_from_filename {
        "; try specifying a year with the -y option"
    } else {
        ""
    }
}
