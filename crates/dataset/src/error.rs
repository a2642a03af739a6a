//! Error types for the imdgrid-dataset crate.

/// Error type for all fallible operations in the imdgrid-dataset crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DatasetError {
    /// Returned when a dataset identifier is not one of `rain`, `mintemp`
    /// or `maxtemp`.
    #[error("invalid data type: {name} (valid data types: rain, mintemp, maxtemp)")]
    UnknownDataType {
        /// The identifier that was provided.
        name: String,
    },
}
