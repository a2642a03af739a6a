//! Best-effort facts about an input file, from its size and name alone.

use std::fmt;
use std::path::{Path, PathBuf};

use imdgrid_dataset::{DataType, RAIN, TEMP_MIN, YearLength};
use tracing::debug;

use crate::error::ResolveError;

/// Data type as far as it can be told from the input file.
///
/// Rainfall and temperature files differ in size, but minimum and maximum
/// temperature files do not; [`DetectedType::Temp`] is what remains when the
/// file name does not settle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectedType {
    /// Rainfall-sized file.
    Rain,
    /// Temperature-sized file, min or max unknown.
    Temp,
    /// Temperature-sized file whose name contains `min`.
    MinTemp,
    /// Temperature-sized file whose name contains `max`.
    MaxTemp,
}

impl DetectedType {
    /// The concrete data type, or `None` for ambiguous temperature data.
    pub fn data_type(self) -> Option<DataType> {
        match self {
            Self::Rain => Some(DataType::Rain),
            Self::Temp => None,
            Self::MinTemp => Some(DataType::MinTemp),
            Self::MaxTemp => Some(DataType::MaxTemp),
        }
    }
}

impl From<DataType> for DetectedType {
    fn from(t: DataType) -> Self {
        match t {
            DataType::Rain => Self::Rain,
            DataType::MinTemp => Self::MinTemp,
            DataType::MaxTemp => Self::MaxTemp,
        }
    }
}

impl fmt::Display for DetectedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data_type() {
            Some(t) => f.write_str(t.id()),
            None => f.write_str("temp"),
        }
    }
}

/// What could be inferred about an input file before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputInfo {
    path: PathBuf,
    detected: DetectedType,
    length: YearLength,
    year: Option<i32>,
    year_from_filename: bool,
}

impl InputInfo {
    /// Absolute input path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn detected(&self) -> DetectedType {
        self.detected
    }

    /// Number of daily records, fixed by the size.
    pub fn length(&self) -> YearLength {
        self.length
    }

    /// Year found in the path, if any.
    pub fn year(&self) -> Option<i32> {
        self.year
    }

    pub fn year_from_filename(&self) -> bool {
        self.year_from_filename
    }

    #[cfg(test)]
    pub(crate) fn for_test(detected: DetectedType, length: YearLength, year: Option<i32>) -> Self {
        Self {
            path: PathBuf::from("/data/input.grd"),
            detected,
            length,
            year,
            year_from_filename: year.is_some(),
        }
    }
}

/// Inspect `path` and infer its data type, day count and year.
///
/// Ambiguity (no year, temperature data of unknown kind) is not an error
/// here; it is left for [`validate_input`](crate::validate_input).
///
/// # Errors
///
/// Returns [`ResolveError::MissingInput`] if `path` does not exist,
/// [`ResolveError::Metadata`] if its size cannot be read, and
/// [`ResolveError::InvalidSize`] if the size is not a legal GRD size.
pub fn inspect_input(path: &Path) -> Result<InputInfo, ResolveError> {
    if !path.exists() {
        return Err(ResolveError::MissingInput {
            path: path.to_path_buf(),
        });
    }
    let metadata_err = |source| ResolveError::Metadata {
        path: path.to_path_buf(),
        source,
    };
    let size = std::fs::metadata(path).map_err(metadata_err)?.len();
    let abs = std::path::absolute(path).map_err(metadata_err)?;

    let (mut detected, length) = detect_from_size(size).ok_or_else(|| ResolveError::InvalidSize {
        path: abs.clone(),
        size,
    })?;

    if detected == DetectedType::Temp {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        detected = temperature_from_name(&name);
    }

    // Path as supplied, not the absolute one.
    let year = year_from_path(path);

    debug!(
        path = %abs.display(),
        size,
        detected = %detected,
        days = length.days(),
        year = ?year,
        "inspected input"
    );

    Ok(InputInfo {
        path: abs,
        detected,
        length,
        year,
        year_from_filename: year.is_some(),
    })
}

/// Map a byte size onto the dataset family and day count it belongs to.
fn detect_from_size(size: u64) -> Option<(DetectedType, YearLength)> {
    [YearLength::Common, YearLength::Leap]
        .into_iter()
        .find_map(|len| {
            if size == RAIN.file_size(len) {
                Some((DetectedType::Rain, len))
            } else if size == TEMP_MIN.file_size(len) {
                Some((DetectedType::Temp, len))
            } else {
                None
            }
        })
}

/// Case-insensitive `min`/`max` lookup; `min` wins when both appear.
fn temperature_from_name(name: &str) -> DetectedType {
    let lower = name.to_lowercase();
    if lower.contains("min") {
        DetectedType::MinTemp
    } else if lower.contains("max") {
        DetectedType::MaxTemp
    } else {
        DetectedType::Temp
    }
}

/// First run of four ASCII digits anywhere in `path`, read as a year.
///
/// The leftmost match wins: `rain_12345.grd` gives 1234 and
/// `2001/rain_1999.grd` gives 2001.
pub fn year_from_path(path: &Path) -> Option<i32> {
    let s = path.to_string_lossy();
    let bytes = s.as_bytes();
    let start = bytes
        .windows(4)
        .position(|w| w.iter().all(u8::is_ascii_digit))?;
    s[start..start + 4].parse().ok()
}
