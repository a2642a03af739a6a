//! Low-level NetCDF construction helpers.

use crate::error::IoError;

pub(crate) const TIME_VAR: &str = "time";
pub(crate) const LAT_VAR: &str = "latitude";
pub(crate) const LON_VAR: &str = "longitude";
pub(crate) const LAT_UNITS: &str = "degrees_north";
pub(crate) const LON_UNITS: &str = "degrees_east";
pub(crate) const CALENDAR: &str = "standard";

/// CF time units counting days from the first of January of `year`.
pub(crate) fn time_units(year: i32) -> String {
    format!("days since {year:04}-01-01 00:00:00.0")
}

/// Define the time variable on the unlimited `time` dimension and write the
/// day offsets `0..n_days`.
pub(crate) fn put_time_axis(
    file: &mut netcdf::FileMut,
    n_days: usize,
    year: i32,
) -> Result<(), IoError> {
    let offsets: Vec<f32> = (0..n_days).map(|d| d as f32).collect();
    let mut var = file.add_variable::<f32>(TIME_VAR, &[TIME_VAR])?;
    var.put_attribute("units", time_units(year))?;
    var.put_attribute("calendar", CALENDAR)?;
    var.put_values(&offsets, (0..n_days,))?;
    Ok(())
}

/// Define a 1-D coordinate variable named after its own dimension.
pub(crate) fn put_coordinate(
    file: &mut netcdf::FileMut,
    name: &str,
    units: &str,
    values: &[f32],
) -> Result<(), IoError> {
    let mut var = file.add_variable::<f32>(name, &[name])?;
    var.put_attribute("units", units)?;
    var.put_values(values, ..)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_units_format() {
        assert_eq!(time_units(2001), "days since 2001-01-01 00:00:00.0");
    }
}
