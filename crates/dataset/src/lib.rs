//! # imdgrid-dataset
//!
//! Fixed grid definitions for the three IMD gridded datasets that arrive as
//! headerless GRD files: 0.25° daily rainfall and 1° daily minimum/maximum
//! temperature over the Indian subcontinent.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["DataType"] -->|".spec()"| B["DatasetSpec"]
//!     B -->|".lats() / .lons()"| C["axis values"]
//!     B -->|".file_size(len)"| D["legal GRD size"]
//!     E["year"] -->|"YearLength::expected_for()"| F["YearLength"]
//!     F -->|".days()"| G["365 / 366"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use imdgrid_dataset::{DataType, YearLength};
//!
//! let spec = DataType::Rain.spec();
//! assert_eq!(spec.n_lats(), 129);
//! assert_eq!(spec.n_lons(), 135);
//! assert_eq!(spec.file_size(YearLength::Common), 25_425_901);
//! assert_eq!(spec.var_name(), "rainfall");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `data_type` | Dataset identifiers as used on the command line |
//! | `spec` | Immutable grid, naming and fill-value constants |
//! | `year` | Day counts, the simplified leap rule and the valid year range |
//! | `error` | Error types |

mod data_type;
mod error;
mod spec;
mod year;

pub use data_type::DataType;
pub use error::DatasetError;
pub use spec::{DatasetSpec, RAIN, TEMP_MAX, TEMP_MIN};
pub use year::{MAX_YEAR, MIN_YEAR, YearLength, is_gregorian_leap, is_simplified_leap};
