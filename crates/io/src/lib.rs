//! # imdgrid-io
//!
//! Decode IMD GRD files into in-memory grids and write those grids to
//! NetCDF-4 with CF-style coordinate axes.

mod error;
mod grd_read;
mod grid;
mod netcdf_write;
mod writer;

pub use error::IoError;
pub use grd_read::read_grd;
pub use grid::GridArray;
pub use writer::{DataVariable, WriterConfig, write_netcdf};
