use std::path::PathBuf;

use clap::Parser;
use imdgrid_dataset::{DataType, DatasetError};

/// Convert IMD binary GRD files to NetCDF.
///
/// Invalid arguments exit with status 1, the same as conversion failures.
#[derive(Parser, Debug)]
#[command(
    name = "imd-grd-to-nc",
    version,
    about = "Convert IMD binary GRD rainfall and temperature files to NetCDF-4"
)]
pub struct Cli {
    /// Input GRD file.
    #[arg(short, long)]
    pub infile: PathBuf,

    /// Output NetCDF file (default: input path with a .nc extension).
    #[arg(short, long)]
    pub outfile: Option<PathBuf>,

    /// Overwrite the output file if it exists.
    #[arg(short, long)]
    pub clobber: bool,

    /// Data type of the input: rain, mintemp or maxtemp.
    #[arg(short = 't', long = "type", value_parser = parse_data_type)]
    pub data_type: Option<DataType>,

    /// Year of the input data.
    #[arg(short, long, allow_negative_numbers = true)]
    pub year: Option<i32>,

    /// Name of the NetCDF data variable.
    #[arg(short = 'v', long)]
    pub ncvar: Option<String>,

    /// Units of the NetCDF data variable.
    #[arg(short = 'u', long)]
    pub ncunits: Option<String>,

    /// Deflate level of the data variable (0 = uncompressed).
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(i32).range(0..=9))]
    pub deflate_level: i32,

    /// Increase log verbosity (--verbose info, twice debug, three times trace).
    #[arg(long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

fn parse_data_type(s: &str) -> Result<DataType, DatasetError> {
    s.parse()
}
