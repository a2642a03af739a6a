//! Where the NetCDF output goes and how its data variable is labelled.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ResolveError;
use crate::overrides::Overrides;
use crate::validate::ResolvedInput;

/// Extension given to derived output paths.
pub const NC_EXTENSION: &str = ".nc";

/// Resolved destination of a conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOutput {
    path: PathBuf,
    var_name: String,
    units: String,
}

impl ResolvedOutput {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// NetCDF name of the data variable.
    pub fn var_name(&self) -> &str {
        &self.var_name
    }

    /// `units` attribute of the data variable.
    pub fn units(&self) -> &str {
        &self.units
    }
}

/// Resolve the output path, variable name and units for a validated input.
///
/// Overrides win; otherwise the path is derived with
/// [`default_output_path`] and the names come from the dataset definition.
///
/// # Errors
///
/// Returns [`ResolveError::OutputExists`] if the output path already exists
/// and overwriting was not requested.
pub fn resolve_output(
    input: &ResolvedInput,
    overrides: &Overrides,
) -> Result<ResolvedOutput, ResolveError> {
    let path = match overrides.outfile() {
        Some(p) => p.to_path_buf(),
        None => default_output_path(input.path()),
    };

    if path.exists() && !overrides.clobber() {
        return Err(ResolveError::OutputExists { path });
    }

    let spec = input.data_type().spec();
    let var_name = overrides.var_name().unwrap_or(spec.var_name()).to_string();
    let units = overrides.units().unwrap_or(spec.units()).to_string();

    debug!(path = %path.display(), var_name = %var_name, units = %units, "output resolved");

    Ok(ResolvedOutput {
        path,
        var_name,
        units,
    })
}

/// Replace the final extension of `input` with [`NC_EXTENSION`].
///
/// The extension is the last `.` in the file name and everything after it,
/// provided at least one character follows the dot. Without one,
/// [`NC_EXTENSION`] is appended instead: `rain.grd` becomes `rain.nc`,
/// `rain` becomes `rain.nc` and `rain.` becomes `rain..nc`. Dots in
/// directory names are never part of the extension.
pub fn default_output_path(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = match name.rfind('.') {
        Some(i) if i + 1 < name.len() => &name[..i],
        _ => name.as_str(),
    };
    input.with_file_name(format!("{stem}{NC_EXTENSION}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_last_extension() {
        assert_eq!(
            default_output_path(Path::new("/data/rain_2001.grd")),
            PathBuf::from("/data/rain_2001.nc")
        );
        assert_eq!(
            default_output_path(Path::new("/data/rain.2001.GRD")),
            PathBuf::from("/data/rain.2001.nc")
        );
    }

    #[test]
    fn appends_without_extension() {
        assert_eq!(
            default_output_path(Path::new("/data/rain2001")),
            PathBuf::from("/data/rain2001.nc")
        );
        assert_eq!(
            default_output_path(Path::new("/data/rain2001.")),
            PathBuf::from("/data/rain2001..nc")
        );
    }

    #[test]
    fn dots_in_directories_are_ignored() {
        assert_eq!(
            default_output_path(Path::new("/data.v2/rain2001")),
            PathBuf::from("/data.v2/rain2001.nc")
        );
    }

    #[test]
    fn derivation_is_idempotent() {
        let p = Path::new("/data/tmax_1999.grd");
        assert_eq!(default_output_path(p), default_output_path(p));
    }
}
