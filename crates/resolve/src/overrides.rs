//! Caller-supplied values that take precedence over inferred ones.

use std::path::{Path, PathBuf};

use imdgrid_dataset::DataType;

/// Explicit choices made by the caller.
///
/// Nothing here is validated on construction; [`validate_input`] and
/// [`resolve_output`] reconcile these values with what was inferred from the
/// input file.
///
/// [`validate_input`]: crate::validate_input
/// [`resolve_output`]: crate::resolve_output
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    data_type: Option<DataType>,
    year: Option<i32>,
    outfile: Option<PathBuf>,
    clobber: bool,
    var_name: Option<String>,
    units: Option<String>,
}

impl Overrides {
    /// Force the data type instead of inferring it.
    pub fn with_data_type(mut self, data_type: Option<DataType>) -> Self {
        self.data_type = data_type;
        self
    }

    /// Force the year instead of reading it from the file name.
    pub fn with_year(mut self, year: Option<i32>) -> Self {
        self.year = year;
        self
    }

    /// Write to `outfile` instead of a path derived from the input.
    pub fn with_outfile(mut self, outfile: Option<impl Into<PathBuf>>) -> Self {
        self.outfile = outfile.map(Into::into);
        self
    }

    /// Allow an existing output file to be overwritten.
    pub fn with_clobber(mut self, clobber: bool) -> Self {
        self.clobber = clobber;
        self
    }

    /// Name the NetCDF data variable.
    pub fn with_var_name(mut self, name: Option<impl Into<String>>) -> Self {
        self.var_name = name.map(Into::into);
        self
    }

    /// Set the NetCDF `units` attribute of the data variable.
    pub fn with_units(mut self, units: Option<impl Into<String>>) -> Self {
        self.units = units.map(Into::into);
        self
    }

    pub fn data_type(&self) -> Option<DataType> {
        self.data_type
    }

    pub fn year(&self) -> Option<i32> {
        self.year
    }

    pub fn outfile(&self) -> Option<&Path> {
        self.outfile.as_deref()
    }

    pub fn clobber(&self) -> bool {
        self.clobber
    }

    pub fn var_name(&self) -> Option<&str> {
        self.var_name.as_deref()
    }

    pub fn units(&self) -> Option<&str> {
        self.units.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_overrides() {
        let o = Overrides::default();
        assert_eq!(o.data_type(), None);
        assert_eq!(o.year(), None);
        assert_eq!(o.outfile(), None);
        assert!(!o.clobber());
        assert_eq!(o.var_name(), None);
        assert_eq!(o.units(), None);
    }

    #[test]
    fn builder_methods() {
        let o = Overrides::default()
            .with_data_type(Some(DataType::MaxTemp))
            .with_year(Some(1999))
            .with_outfile(Some("out.nc"))
            .with_clobber(true)
            .with_var_name(Some("tmax"))
            .with_units(Some("degC"));
        assert_eq!(o.data_type(), Some(DataType::MaxTemp));
        assert_eq!(o.year(), Some(1999));
        assert_eq!(o.outfile(), Some(Path::new("out.nc")));
        assert!(o.clobber());
        assert_eq!(o.var_name(), Some("tmax"));
        assert_eq!(o.units(), Some("degC"));
    }
}
