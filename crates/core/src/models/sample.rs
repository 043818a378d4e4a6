use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::sample_type::{QuantityType, SampleType};
use super::unit::Quantity;

/// One normalized reading returned to callers.
///
/// Field names follow the channel's wire format.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Provider sample identity as text.
    pub uuid: String,

    /// Numeric value expressed in the data type's unit.
    pub value: f64,

    /// Start of the sample window, milliseconds since epoch.
    pub date_from: i64,

    /// End of the sample window, milliseconds since epoch.
    pub date_to: i64,
}

/// Payload of a stored provider sample.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum SampleValue {
    Quantity(Quantity),
    Category(i64),
}

/// A sample as the provider stores and returns it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProviderSample {
    pub uuid: Uuid,
    pub sample_type: SampleType,
    pub value: SampleValue,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl ProviderSample {
    /// Provider identity rendered the way callers receive it (uppercase, hyphenated).
    pub fn identity(&self) -> String {
        self.uuid
            .hyphenated()
            .encode_upper(&mut Uuid::encode_buffer())
            .to_string()
    }
}

/// A new quantity sample submitted for persistence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuantitySample {
    pub quantity_type: QuantityType,
    pub quantity: Quantity,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl QuantitySample {
    pub fn new(
        quantity_type: QuantityType,
        quantity: Quantity,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Self {
        Self {
            quantity_type,
            quantity,
            start,
            end,
        }
    }
}
