use std::{fmt::Display, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::FareError;

#[derive(Debug, Deserialize, Serialize, JsonSchema, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RideType {
    Economy,
    Premium,
}

impl Display for RideType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                RideType::Economy => "economy",
                RideType::Premium => "premium",
            }
        )
    }
}

impl FromStr for RideType {
    type Err = FareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "economy" => Ok(RideType::Economy),
            "premium" => Ok(RideType::Premium),
            other => Err(FareError::InvalidInput(format!(
                "unrecognized ride type '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, JsonSchema, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RideConfiguration {
    pub ride_type: RideType,

    /// Shared rides get the shared-ride discount
    #[serde(default, alias = "isSharedRide")]
    pub is_shared: bool,
}

impl RideConfiguration {
    pub fn new(ride_type: RideType, is_shared: bool) -> Self {
        Self {
            ride_type,
            is_shared,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_ride_type_ignoring_case() {
        assert_eq!("economy".parse::<RideType>(), Ok(RideType::Economy));
        assert_eq!(" Premium ".parse::<RideType>(), Ok(RideType::Premium));
    }

    #[test]
    fn unknown_ride_type_is_invalid_input() {
        assert!(matches!(
            "luxury".parse::<RideType>(),
            Err(FareError::InvalidInput(_))
        ));
    }

    #[test]
    fn should_deserialize_browser_payload() {
        let config: RideConfiguration =
            serde_json::from_str(r#"{ "rideType": "premium", "isSharedRide": true }"#).unwrap();

        assert_eq!(config, RideConfiguration::new(RideType::Premium, true));
    }

    #[test]
    fn shared_defaults_to_false() {
        let config: RideConfiguration =
            serde_json::from_str(r#"{ "rideType": "economy" }"#).unwrap();

        assert!(!config.is_shared);
    }

    #[test]
    fn should_reject_unknown_ride_type_in_payload() {
        let result = serde_json::from_str::<RideConfiguration>(r#"{ "rideType": "luxury" }"#);
        assert!(result.is_err());
    }
}
