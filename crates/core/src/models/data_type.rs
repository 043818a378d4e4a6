use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::HealthError;

/// Group of data types that a provider either supports as a whole or not at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CapabilityTier {
    /// Ordinary quantity types (activity, vitals, body measurements, nutrition).
    Base,
    /// Heart-rhythm event categories recorded by wearables on newer providers.
    HeartRhythmEvents,
}

/// Platform-independent health data type key.
///
/// Serialized in SCREAMING_SNAKE_CASE, e.g. `"STEPS"`, `"HEART_RATE"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HealthDataType {
    ActiveEnergyBurned,
    BasalEnergyBurned,
    BloodGlucose,
    BloodOxygen,
    BloodPressureDiastolic,
    BloodPressureSystolic,
    BodyFatPercentage,
    BodyMassIndex,
    BodyTemperature,
    ElectrodermalActivity,
    HeartRate,
    HeartRateVariabilitySdnn,
    Height,
    HighHeartRateEvent,
    IrregularHeartRateEvent,
    LowHeartRateEvent,
    RestingHeartRate,
    Steps,
    WaistCircumference,
    WalkingHeartRate,
    Weight,
    DistanceWalkingRunning,
    FlightsClimbed,
    DietaryFatTotal,
    DietaryProtein,
    DietaryCarbohydrates,
}

impl HealthDataType {
    /// Every key in the closed enumeration.
    pub const ALL: [HealthDataType; 26] = [
        Self::ActiveEnergyBurned,
        Self::BasalEnergyBurned,
        Self::BloodGlucose,
        Self::BloodOxygen,
        Self::BloodPressureDiastolic,
        Self::BloodPressureSystolic,
        Self::BodyFatPercentage,
        Self::BodyMassIndex,
        Self::BodyTemperature,
        Self::ElectrodermalActivity,
        Self::HeartRate,
        Self::HeartRateVariabilitySdnn,
        Self::Height,
        Self::HighHeartRateEvent,
        Self::IrregularHeartRateEvent,
        Self::LowHeartRateEvent,
        Self::RestingHeartRate,
        Self::Steps,
        Self::WaistCircumference,
        Self::WalkingHeartRate,
        Self::Weight,
        Self::DistanceWalkingRunning,
        Self::FlightsClimbed,
        Self::DietaryFatTotal,
        Self::DietaryProtein,
        Self::DietaryCarbohydrates,
    ];

    /// The wire key for this data type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ActiveEnergyBurned => "ACTIVE_ENERGY_BURNED",
            Self::BasalEnergyBurned => "BASAL_ENERGY_BURNED",
            Self::BloodGlucose => "BLOOD_GLUCOSE",
            Self::BloodOxygen => "BLOOD_OXYGEN",
            Self::BloodPressureDiastolic => "BLOOD_PRESSURE_DIASTOLIC",
            Self::BloodPressureSystolic => "BLOOD_PRESSURE_SYSTOLIC",
            Self::BodyFatPercentage => "BODY_FAT_PERCENTAGE",
            Self::BodyMassIndex => "BODY_MASS_INDEX",
            Self::BodyTemperature => "BODY_TEMPERATURE",
            Self::ElectrodermalActivity => "ELECTRODERMAL_ACTIVITY",
            Self::HeartRate => "HEART_RATE",
            Self::HeartRateVariabilitySdnn => "HEART_RATE_VARIABILITY_SDNN",
            Self::Height => "HEIGHT",
            Self::HighHeartRateEvent => "HIGH_HEART_RATE_EVENT",
            Self::IrregularHeartRateEvent => "IRREGULAR_HEART_RATE_EVENT",
            Self::LowHeartRateEvent => "LOW_HEART_RATE_EVENT",
            Self::RestingHeartRate => "RESTING_HEART_RATE",
            Self::Steps => "STEPS",
            Self::WaistCircumference => "WAIST_CIRCUMFERENCE",
            Self::WalkingHeartRate => "WALKING_HEART_RATE",
            Self::Weight => "WEIGHT",
            Self::DistanceWalkingRunning => "DISTANCE_WALKING_RUNNING",
            Self::FlightsClimbed => "FLIGHTS_CLIMBED",
            Self::DietaryFatTotal => "DIETARY_FAT_TOTAL",
            Self::DietaryProtein => "DIETARY_PROTEIN",
            Self::DietaryCarbohydrates => "DIETARY_CARBOHYDRATES",
        }
    }

    /// Looks up a key by its wire name. Matching is exact (case-sensitive).
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == key)
    }

    /// The capability tier the provider must report for this type to be registered.
    pub fn tier(&self) -> CapabilityTier {
        match self {
            Self::HighHeartRateEvent | Self::IrregularHeartRateEvent | Self::LowHeartRateEvent => {
                CapabilityTier::HeartRhythmEvents
            }
            _ => CapabilityTier::Base,
        }
    }
}

impl fmt::Display for HealthDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HealthDataType {
    type Err = HealthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| HealthError::unresolved(s, "data types"))
    }
}
