//! Decoded daily grids for one year.

use imdgrid_dataset::{DataType, DatasetSpec};
use ndarray::{Array3, Axis};

use crate::error::IoError;

/// A year of daily grids shaped `[days, n_lats, n_lons]`.
///
/// The shape always matches the dataset definition of `data_type`; every
/// cell holds a decoded value, fill values included.
#[derive(Debug, Clone, PartialEq)]
pub struct GridArray {
    data_type: DataType,
    year: i32,
    data: Array3<f32>,
}

impl GridArray {
    /// Wrap `data` as the grids of `data_type` for `year`.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Shape`] if the latitude or longitude extent of
    /// `data` differs from the dataset definition.
    pub fn new(data_type: DataType, year: i32, data: Array3<f32>) -> Result<Self, IoError> {
        let spec = data_type.spec();
        let (_, ny, nx) = data.dim();
        if ny != spec.n_lats() || nx != spec.n_lons() {
            return Err(IoError::Shape {
                reason: format!(
                    "{data_type} grid must be {}x{}, got {ny}x{nx}",
                    spec.n_lats(),
                    spec.n_lons()
                ),
            });
        }
        Ok(Self {
            data_type,
            year,
            data,
        })
    }

    pub fn spec(&self) -> &'static DatasetSpec {
        self.data_type.spec()
    }

    /// Year of the first day.
    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn n_days(&self) -> usize {
        self.data.len_of(Axis(0))
    }

    /// The full `[days, n_lats, n_lons]` array.
    pub fn data(&self) -> &Array3<f32> {
        &self.data
    }
}
