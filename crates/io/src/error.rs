//! Error types for imdgrid-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the imdgrid-io crate.
///
/// This enum covers file-system failures, GRD payloads that end early,
/// array shape problems and errors from the NetCDF library.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an I/O failure while reading a GRD file.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// Path being read.
        path: PathBuf,
        /// Underlying failure.
        source: std::io::Error,
    },

    /// Returned when a GRD file ends before its last daily record.
    #[error("{} ends inside day {day} of {days}", path.display())]
    Truncated {
        /// Path being read.
        path: PathBuf,
        /// Zero-based index of the record that could not be read.
        day: usize,
        /// Number of records expected.
        days: usize,
    },

    /// Returned when an array does not have the shape its dataset requires.
    #[error("shape error: {reason}")]
    Shape {
        /// Description of the mismatch.
        reason: String,
    },

    /// Wraps an error originating from the NetCDF library.
    #[error("netcdf error: {reason}")]
    Netcdf {
        /// Description of the underlying NetCDF failure.
        reason: String,
    },

    /// Returned when a writer configuration is invalid.
    #[error("invalid writer configuration: {details}")]
    Validation {
        /// Human-readable description of the problem.
        details: String,
    },
}

impl From<netcdf::Error> for IoError {
    fn from(e: netcdf::Error) -> Self {
        IoError::Netcdf {
            reason: e.to_string(),
        }
    }
}

impl From<ndarray::ShapeError> for IoError {
    fn from(e: ndarray::ShapeError) -> Self {
        IoError::Shape {
            reason: e.to_string(),
        }
    }
}
