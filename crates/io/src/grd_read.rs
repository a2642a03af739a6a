//! Decoding of headerless IMD GRD files.

use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt};
use imdgrid_dataset::{DataType, YearLength};
use ndarray::Array3;
use tracing::{debug, info};

use crate::error::IoError;
use crate::grid::GridArray;

/// Read a GRD file holding `length` daily grids of `data_type` for `year`.
///
/// Each record is `n_lats * n_lons` little-endian `f32` values in row-major
/// (latitude, longitude) order. Values are taken as stored; fill values are
/// not replaced. Bytes after the last record are not read.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if `path` does not exist,
/// [`IoError::Truncated`] if the file ends before the last record, or
/// [`IoError::Io`] for any other read failure.
pub fn read_grd(
    path: &Path,
    data_type: DataType,
    length: YearLength,
    year: i32,
) -> Result<GridArray, IoError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => IoError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => IoError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    info!(path = %path.display(), %data_type, days = length.days(), "decoding GRD records");
    let data = decode_records(BufReader::new(file), data_type, length, path)?;
    GridArray::new(data_type, year, data)
}

/// Decode `length` records from `reader` into a `[days, n_lats, n_lons]`
/// array. `path` is only used in error values.
pub(crate) fn decode_records<R: Read>(
    mut reader: R,
    data_type: DataType,
    length: YearLength,
    path: &Path,
) -> Result<Array3<f32>, IoError> {
    let spec = data_type.spec();
    let days = length.days();
    let cells = spec.cells_per_day();

    let mut values = vec![0.0_f32; days * cells];
    for (day, record) in values.chunks_exact_mut(cells).enumerate() {
        reader
            .read_f32_into::<LittleEndian>(record)
            .map_err(|e| match e.kind() {
                ErrorKind::UnexpectedEof => IoError::Truncated {
                    path: path.to_path_buf(),
                    day,
                    days,
                },
                _ => IoError::Io {
                    path: path.to_path_buf(),
                    source: e,
                },
            })?;
    }
    debug!(days, cells, "records decoded");

    Ok(Array3::from_shape_vec(
        (days, spec.n_lats(), spec.n_lons()),
        values,
    )?)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use approx::assert_abs_diff_eq;

    use super::*;

    fn encode(values: impl IntoIterator<Item = f32>) -> Vec<u8> {
        values.into_iter().flat_map(f32::to_le_bytes).collect()
    }

    #[test]
    fn decodes_row_major_records() {
        let cells = 31 * 31;
        let bytes = encode((0..365 * cells).map(|i| i as f32));
        let data = decode_records(
            Cursor::new(bytes),
            DataType::MaxTemp,
            YearLength::Common,
            Path::new("t.grd"),
        )
        .unwrap();

        assert_eq!(data.dim(), (365, 31, 31));
        assert_abs_diff_eq!(data[[0, 0, 0]], 0.0);
        assert_abs_diff_eq!(data[[0, 0, 1]], 1.0);
        assert_abs_diff_eq!(data[[0, 1, 0]], 31.0);
        assert_abs_diff_eq!(data[[1, 0, 0]], cells as f32);
        assert_abs_diff_eq!(data[[364, 30, 30]], (365 * cells - 1) as f32);
    }

    #[test]
    fn fill_values_pass_through() {
        let cells = 31 * 31;
        let bytes = encode(std::iter::repeat_n(99.9_f32, 366 * cells));
        let data = decode_records(
            Cursor::new(bytes),
            DataType::MinTemp,
            YearLength::Leap,
            Path::new("t.grd"),
        )
        .unwrap();
        assert!(data.iter().all(|&v| v == 99.9_f32));
    }

    #[test]
    fn trailing_byte_is_ignored() {
        let cells = 31 * 31;
        let mut bytes = encode(std::iter::repeat_n(1.5_f32, 365 * cells));
        bytes.push(0xff);
        let data = decode_records(
            Cursor::new(bytes),
            DataType::MinTemp,
            YearLength::Common,
            Path::new("t.grd"),
        )
        .unwrap();
        assert_eq!(data.len(), 365 * cells);
    }

    #[test]
    fn short_input_reports_the_missing_day() {
        let cells = 31 * 31;
        // Ten full days and half of the eleventh.
        let bytes = encode(std::iter::repeat_n(0.0_f32, 10 * cells + cells / 2));
        let err = decode_records(
            Cursor::new(bytes),
            DataType::MinTemp,
            YearLength::Common,
            Path::new("t.grd"),
        )
        .unwrap_err();
        assert!(
            matches!(err, IoError::Truncated { day: 10, days: 365, .. }),
            "got {err:?}"
        );
    }
}
