//! Pure conversion functions: parsed CLI flags -> crate API config types.

use anyhow::{Context, Result};

use imdgrid_io::WriterConfig;
use imdgrid_resolve::Overrides;

use crate::cli::Cli;

/// Builds the resolution [`Overrides`] from the command-line flags.
pub fn build_overrides(cli: &Cli) -> Overrides {
    Overrides::default()
        .with_data_type(cli.data_type)
        .with_year(cli.year)
        .with_outfile(cli.outfile.clone())
        .with_clobber(cli.clobber)
        .with_var_name(cli.ncvar.as_deref())
        .with_units(cli.ncunits.as_deref())
}

/// Builds a validated [`WriterConfig`] from the command-line flags.
pub fn build_writer_config(cli: &Cli) -> Result<WriterConfig> {
    let cfg = WriterConfig::default().with_deflate_level(cli.deflate_level);
    cfg.validate().context("invalid --deflate-level")?;
    Ok(cfg)
}
