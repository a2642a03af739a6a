//! High-level NetCDF writer configuration and orchestration.

use std::path::Path;

use tracing::info;

use crate::error::IoError;
use crate::grid::GridArray;
use crate::netcdf_write::{self, LAT_UNITS, LAT_VAR, LON_UNITS, LON_VAR, TIME_VAR};

/// Configuration for writing grids to NetCDF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterConfig {
    /// zlib deflate level of the data variable (0 = stored, 9 = smallest).
    deflate_level: i32,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            deflate_level: 3,
        }
    }
}

impl WriterConfig {
    /// Sets the deflate level.
    pub fn with_deflate_level(mut self, level: i32) -> Self {
        self.deflate_level = level;
        self
    }

    pub fn deflate_level(&self) -> i32 {
        self.deflate_level
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] if the deflate level is outside 0..=9.
    pub fn validate(&self) -> Result<(), IoError> {
        if !(0..=9).contains(&self.deflate_level) {
            return Err(IoError::Validation {
                details: format!("deflate_level must be 0..=9, got {}", self.deflate_level),
            });
        }
        Ok(())
    }
}

/// Name and units of the data variable in the output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataVariable {
    name: String,
    units: String,
}

impl DataVariable {
    pub fn new(name: impl Into<String>, units: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            units: units.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn units(&self) -> &str {
        &self.units
    }
}

/// Write `grid` to a new NetCDF-4 file at `path`, replacing any existing
/// file.
///
/// The file holds an unlimited `time` axis counting days since the first of
/// January of the grid's year, `latitude`/`longitude` axes from the dataset
/// definition, and the deflated data variable over
/// `(time, latitude, longitude)` with the dataset's `_FillValue`.
///
/// # Errors
///
/// Returns [`IoError::Validation`] if the configuration is invalid, or
/// [`IoError::Netcdf`] if the file cannot be created or written.
pub fn write_netcdf(
    path: &Path,
    grid: &GridArray,
    variable: &DataVariable,
    config: &WriterConfig,
) -> Result<(), IoError> {
    config.validate()?;

    let spec = grid.spec();
    let n_days = grid.n_days();
    let values = grid.data().as_slice().ok_or_else(|| IoError::Shape {
        reason: "grid data is not contiguous".to_string(),
    })?;

    info!(
        path = %path.display(),
        variable = variable.name(),
        n_days,
        deflate_level = config.deflate_level,
        "writing NetCDF"
    );

    let mut file = netcdf::create(path)?;
    file.add_unlimited_dimension(TIME_VAR)?;
    file.add_dimension(LAT_VAR, spec.n_lats())?;
    file.add_dimension(LON_VAR, spec.n_lons())?;

    netcdf_write::put_time_axis(&mut file, n_days, grid.year())?;
    netcdf_write::put_coordinate(&mut file, LAT_VAR, LAT_UNITS, &spec.lats())?;
    netcdf_write::put_coordinate(&mut file, LON_VAR, LON_UNITS, &spec.lons())?;

    let mut var = file.add_variable::<f32>(variable.name(), &[TIME_VAR, LAT_VAR, LON_VAR])?;
    var.set_compression(config.deflate_level, false)?;
    var.set_fill_value(spec.fill_value())?;
    var.put_attribute("units", variable.units())?;
    var.put_values(values, (0..n_days, .., ..))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = WriterConfig::default();
        assert_eq!(config.deflate_level, 3);
    }

    #[test]
    fn builder_methods() {
        let config = WriterConfig::default().with_deflate_level(9);
        assert_eq!(config.deflate_level(), 9);
    }

    #[test]
    fn validate_rejects_out_of_range_level() {
        for level in [-1, 10] {
            let err = WriterConfig::default()
                .with_deflate_level(level)
                .validate()
                .unwrap_err();
            match err {
                IoError::Validation { details } => assert!(details.contains("deflate_level")),
                other => panic!("expected Validation error, got {other:?}"),
            }
        }
    }

    #[test]
    fn data_variable_accessors() {
        let v = DataVariable::new("rainfall", "mm");
        assert_eq!(v.name(), "rainfall");
        assert_eq!(v.units(), "mm");
    }
}
