//! Inbound method surface.
//!
//! A call arrives as a method name plus a JSON argument bag. It is parsed into
//! [`HealthMethod`] at the boundary, so unknown methods and malformed
//! arguments are rejected before any provider work happens.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::errors::{HealthError, Result};
use crate::models::TimeRange;

pub const CHECK_AVAILABILITY: &str = "checkAvailability";
/// Older name for [`CHECK_AVAILABILITY`], still accepted.
pub const CHECK_IF_HEALTH_DATA_AVAILABLE: &str = "checkIfHealthDataAvailable";
pub const REQUEST_AUTHORIZATION: &str = "requestAuthorization";
pub const GET_DATA: &str = "getData";
pub const WRITE_DATA: &str = "writeData";
pub const GET_SUPPORTED_TYPES: &str = "getSupportedTypes";

/// A parsed inbound call.
#[derive(Debug, Clone, PartialEq)]
pub enum HealthMethod {
    CheckAvailability,
    RequestAuthorization {
        types: Vec<String>,
        write_types: Vec<String>,
    },
    GetData {
        data_type_key: String,
        range: TimeRange,
    },
    WriteData {
        data_type_key: String,
        range: TimeRange,
        value: f64,
    },
    GetSupportedTypes,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthorizationArgs {
    #[serde(default)]
    types: Vec<String>,
    #[serde(default)]
    write_types: Vec<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReadArgs {
    data_type_key: String,
    start_date: i64,
    end_date: i64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WriteArgs {
    data_type_key: String,
    start_date: i64,
    end_date: i64,
    value: f64,
}

impl HealthMethod {
    /// Parses a method name and its argument bag.
    ///
    /// `args` may be `null` for methods without arguments.
    pub fn parse(method: &str, args: &Value) -> Result<Self> {
        match method {
            CHECK_AVAILABILITY | CHECK_IF_HEALTH_DATA_AVAILABLE => Ok(Self::CheckAvailability),
            REQUEST_AUTHORIZATION => {
                let a: AuthorizationArgs = decode(method, args)?;
                Ok(Self::RequestAuthorization {
                    types: a.types,
                    write_types: a.write_types,
                })
            }
            GET_DATA => {
                let a: ReadArgs = decode(method, args)?;
                Ok(Self::GetData {
                    data_type_key: a.data_type_key,
                    range: TimeRange::new(a.start_date, a.end_date),
                })
            }
            WRITE_DATA => {
                let a: WriteArgs = decode(method, args)?;
                Ok(Self::WriteData {
                    data_type_key: a.data_type_key,
                    range: TimeRange::new(a.start_date, a.end_date),
                    value: a.value,
                })
            }
            GET_SUPPORTED_TYPES => Ok(Self::GetSupportedTypes),
            other => Err(HealthError::UnsupportedMethod(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::CheckAvailability => CHECK_AVAILABILITY,
            Self::RequestAuthorization { .. } => REQUEST_AUTHORIZATION,
            Self::GetData { .. } => GET_DATA,
            Self::WriteData { .. } => WRITE_DATA,
            Self::GetSupportedTypes => GET_SUPPORTED_TYPES,
        }
    }
}

fn decode<T: DeserializeOwned>(method: &str, args: &Value) -> Result<T> {
    let bag = match args {
        Value::Null => Value::Object(Default::default()),
        other => other.clone(),
    };
    serde_json::from_value(bag).map_err(|e| HealthError::invalid_argument(method, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_get_data() {
        let method = HealthMethod::parse(
            "getData",
            &json!({"dataTypeKey": "STEPS", "startDate": 1000, "endDate": 2000}),
        )
        .unwrap();
        assert_eq!(
            method,
            HealthMethod::GetData {
                data_type_key: "STEPS".to_string(),
                range: TimeRange::new(1000, 2000),
            }
        );
    }

    #[test]
    fn test_parse_write_data_accepts_integer_value() {
        let method = HealthMethod::parse(
            "writeData",
            &json!({"dataTypeKey": "STEPS", "startDate": 0, "endDate": 60000, "value": 120}),
        )
        .unwrap();
        assert_eq!(
            method,
            HealthMethod::WriteData {
                data_type_key: "STEPS".to_string(),
                range: TimeRange::new(0, 60000),
                value: 120.0,
            }
        );
    }

    #[test]
    fn test_authorization_lists_default_to_empty() {
        let method = HealthMethod::parse("requestAuthorization", &Value::Null).unwrap();
        assert_eq!(
            method,
            HealthMethod::RequestAuthorization {
                types: vec![],
                write_types: vec![],
            }
        );

        let method =
            HealthMethod::parse("requestAuthorization", &json!({"types": ["STEPS"]})).unwrap();
        assert_eq!(
            method,
            HealthMethod::RequestAuthorization {
                types: vec!["STEPS".to_string()],
                write_types: vec![],
            }
        );
    }

    #[test]
    fn test_missing_argument_is_invalid() {
        let err = HealthMethod::parse("getData", &json!({"dataTypeKey": "STEPS"})).unwrap_err();
        assert!(matches!(err, HealthError::InvalidArgument { .. }));
        assert!(err.to_string().contains("startDate"));
    }

    #[test]
    fn test_unknown_method_is_rejected() {
        let err = HealthMethod::parse("deleteData", &Value::Null).unwrap_err();
        assert_eq!(err, HealthError::UnsupportedMethod("deleteData".to_string()));
    }

    #[test]
    fn test_legacy_availability_name() {
        assert_eq!(
            HealthMethod::parse("checkIfHealthDataAvailable", &Value::Null).unwrap(),
            HealthMethod::CheckAvailability
        );
        assert_eq!(HealthMethod::CheckAvailability.name(), "checkAvailability");
    }
}
