//! Conversion pipeline: resolve, decode, emit.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use imdgrid_io::{DataVariable, read_grd, write_netcdf};
use imdgrid_resolve::{inspect_input, resolve_output, validate_input};

use crate::cli::Cli;
use crate::convert;

/// Run one GRD to NetCDF conversion.
pub fn run(cli: &Cli) -> Result<()> {
    let _cmd = info_span!("convert").entered();

    // Step 1: Build configs from CLI flags
    let overrides = convert::build_overrides(cli);
    let writer_cfg = convert::build_writer_config(cli)?;

    // Step 2: Infer and validate the input
    let info = inspect_input(&cli.infile)?;
    let input = validate_input(&info, &overrides)?;
    info!(
        path = %input.path().display(),
        data_type = %input.data_type(),
        year = input.year(),
        days = input.length().days(),
        "input resolved"
    );

    // Step 3: Resolve the output
    let output = resolve_output(&input, &overrides)?;
    info!(path = %output.path().display(), var = output.var_name(), "output resolved");

    // Step 4: Decode
    let grid = read_grd(input.path(), input.data_type(), input.length(), input.year())
        .with_context(|| format!("failed to read GRD file: {}", input.path().display()))?;

    // Step 5: Emit
    let variable = DataVariable::new(output.var_name(), output.units());
    write_netcdf(output.path(), &grid, &variable, &writer_cfg)
        .with_context(|| format!("failed to write NetCDF: {}", output.path().display()))?;

    info!(path = %output.path().display(), "NetCDF output written");
    Ok(())
}
