//! Immutable grid definitions for the supported datasets.

use crate::year::YearLength;

/// Size in bytes of one stored value (little-endian `f32`).
const VALUE_BYTES: usize = 4;

/// Bytes that follow the last daily record in every IMD GRD file.
const TRAILING_BYTES: u64 = 1;

/// Grid, naming and fill-value constants for one dataset.
///
/// Latitude and longitude values are regular: value `i` on an axis is
/// `origin + i * step`. The three instances ([`RAIN`], [`TEMP_MIN`],
/// [`TEMP_MAX`]) are the only ones that exist.
#[derive(Debug, PartialEq)]
pub struct DatasetSpec {
    lat0: f32,
    lon0: f32,
    step: f32,
    n_lats: usize,
    n_lons: usize,
    var_name: &'static str,
    units: &'static str,
    fill_value: f32,
}

/// 0.25° daily rainfall: 6.5–38.5°N, 66.5–100.0°E, millimetres.
pub static RAIN: DatasetSpec = DatasetSpec {
    lat0: 6.5,
    lon0: 66.5,
    step: 0.25,
    n_lats: 129,
    n_lons: 135,
    var_name: "rainfall",
    units: "mm",
    fill_value: -999.0,
};

/// 1° daily minimum temperature: 7.5–37.5°N, 67.5–97.5°E, degrees Celsius.
pub static TEMP_MIN: DatasetSpec = DatasetSpec {
    lat0: 7.5,
    lon0: 67.5,
    step: 1.0,
    n_lats: 31,
    n_lons: 31,
    var_name: "min_temp",
    units: "celsius",
    fill_value: 99.9,
};

/// 1° daily maximum temperature, same grid as [`TEMP_MIN`].
pub static TEMP_MAX: DatasetSpec = DatasetSpec {
    lat0: 7.5,
    lon0: 67.5,
    step: 1.0,
    n_lats: 31,
    n_lons: 31,
    var_name: "max_temp",
    units: "celsius",
    fill_value: 99.9,
};

impl DatasetSpec {
    /// Number of latitude rows.
    pub fn n_lats(&self) -> usize {
        self.n_lats
    }

    /// Number of longitude columns.
    pub fn n_lons(&self) -> usize {
        self.n_lons
    }

    /// Grid spacing in degrees, shared by both axes.
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Latitude values, south to north.
    pub fn lats(&self) -> Vec<f32> {
        axis(self.lat0, self.step, self.n_lats)
    }

    /// Longitude values, west to east.
    pub fn lons(&self) -> Vec<f32> {
        axis(self.lon0, self.step, self.n_lons)
    }

    /// Default NetCDF variable name.
    pub fn var_name(&self) -> &'static str {
        self.var_name
    }

    /// Default units attribute.
    pub fn units(&self) -> &'static str {
        self.units
    }

    /// `_FillValue` written to the output. Decoding never substitutes it.
    pub fn fill_value(&self) -> f32 {
        self.fill_value
    }

    /// Number of cells in one daily grid.
    pub fn cells_per_day(&self) -> usize {
        self.n_lats * self.n_lons
    }

    /// Size in bytes of one daily record.
    fn record_bytes(&self) -> usize {
        self.cells_per_day() * VALUE_BYTES
    }

    /// Exact size in bytes of a GRD file holding `len` daily records.
    pub fn file_size(&self, len: YearLength) -> u64 {
        (self.record_bytes() * len.days()) as u64 + TRAILING_BYTES
    }
}

fn axis(origin: f32, step: f32, n: usize) -> Vec<f32> {
    (0..n).map(|i| origin + i as f32 * step).collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn rain_axes_span_the_documented_extent() {
        let lats = RAIN.lats();
        let lons = RAIN.lons();
        assert_eq!(lats.len(), 129);
        assert_eq!(lons.len(), 135);
        assert_abs_diff_eq!(lats[0], 6.5);
        assert_abs_diff_eq!(lats[128], 38.5);
        assert_abs_diff_eq!(lons[0], 66.5);
        assert_abs_diff_eq!(lons[134], 100.0);
    }

    #[test]
    fn temperature_axes_span_the_documented_extent() {
        for spec in [&TEMP_MIN, &TEMP_MAX] {
            let lats = spec.lats();
            let lons = spec.lons();
            assert_eq!(lats.len(), 31);
            assert_eq!(lons.len(), 31);
            assert_abs_diff_eq!(lats[0], 7.5);
            assert_abs_diff_eq!(lats[30], 37.5);
            assert_abs_diff_eq!(lons[0], 67.5);
            assert_abs_diff_eq!(lons[30], 97.5);
        }
    }

    #[test]
    fn axes_are_strictly_increasing() {
        for spec in [&RAIN, &TEMP_MIN] {
            for w in spec.lats().windows(2) {
                assert_abs_diff_eq!(w[1] - w[0], spec.step());
            }
            for w in spec.lons().windows(2) {
                assert_abs_diff_eq!(w[1] - w[0], spec.step());
            }
        }
    }

    #[test]
    fn record_bytes() {
        assert_eq!(RAIN.record_bytes(), 129 * 135 * 4);
        assert_eq!(TEMP_MAX.record_bytes(), 31 * 31 * 4);
    }

    #[test]
    fn fill_values() {
        assert_abs_diff_eq!(RAIN.fill_value(), -999.0);
        assert_abs_diff_eq!(TEMP_MIN.fill_value(), 99.9);
    }
}
