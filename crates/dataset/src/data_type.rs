//! Dataset identifiers.

use std::fmt;
use std::str::FromStr;

use crate::error::DatasetError;
use crate::spec::{DatasetSpec, RAIN, TEMP_MAX, TEMP_MIN};

/// One of the three supported IMD datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    /// Daily gridded rainfall, 0.25° resolution.
    Rain,
    /// Daily gridded minimum temperature, 1° resolution.
    MinTemp,
    /// Daily gridded maximum temperature, 1° resolution.
    MaxTemp,
}

impl DataType {
    /// All data types, in the order they are listed to users.
    pub const ALL: [DataType; 3] = [DataType::Rain, DataType::MinTemp, DataType::MaxTemp];

    /// Returns the identifier used on the command line (`rain`, `mintemp`,
    /// `maxtemp`).
    pub fn id(self) -> &'static str {
        match self {
            Self::Rain => "rain",
            Self::MinTemp => "mintemp",
            Self::MaxTemp => "maxtemp",
        }
    }

    /// Returns the immutable grid definition for this data type.
    pub fn spec(self) -> &'static DatasetSpec {
        match self {
            Self::Rain => &RAIN,
            Self::MinTemp => &TEMP_MIN,
            Self::MaxTemp => &TEMP_MAX,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for DataType {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.id() == s)
            .ok_or_else(|| DatasetError::UnknownDataType { name: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_from_str() {
        for t in DataType::ALL {
            assert_eq!(t.id().parse::<DataType>().unwrap(), t);
            assert_eq!(t.to_string(), t.id());
        }
    }

    #[test]
    fn from_str_is_case_sensitive() {
        assert!("Rain".parse::<DataType>().is_err());
    }

    #[test]
    fn generic_temp_is_not_a_data_type() {
        let err = "temp".parse::<DataType>().unwrap_err();
        assert!(matches!(err, DatasetError::UnknownDataType { .. }));
    }

    #[test]
    fn spec_lookup() {
        assert_eq!(DataType::Rain.spec().var_name(), "rainfall");
        assert_eq!(DataType::MinTemp.spec().var_name(), "min_temp");
        assert_eq!(DataType::MaxTemp.spec().var_name(), "max_temp");
    }
}
