//! # imdgrid-resolve
//!
//! Works out everything a GRD conversion needs to know before any payload
//! byte is decoded: what kind of data the input holds, how many days it
//! covers, which year it belongs to, and where the NetCDF output goes.
//!
//! Each stage returns a [`ResolveError`] instead of terminating, so the
//! caller decides how failures are reported.
//!
//! ```mermaid
//! graph LR
//!     A["input path"] -->|"inspect_input()"| B["InputInfo"]
//!     B -->|"validate_input(&Overrides)"| C["ResolvedInput"]
//!     C -->|"resolve_output(&Overrides)"| D["ResolvedOutput"]
//! ```

mod error;
mod infer;
mod output;
mod overrides;
mod validate;

pub use error::ResolveError;
pub use infer::{DetectedType, InputInfo, inspect_input, year_from_path};
pub use output::{NC_EXTENSION, ResolvedOutput, default_output_path, resolve_output};
pub use overrides::Overrides;
pub use validate::{ResolvedInput, validate_input};
