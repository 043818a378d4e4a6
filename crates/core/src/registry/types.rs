//! Type tables, one per capability tier.

use crate::models::{CategoryType, HealthDataType, QuantityType};

/// Type substituted for keys missing from the registry under the fallback policy.
pub const FALLBACK_QUANTITY_TYPE: QuantityType = QuantityType::BodyMass;

/// Quantity types registered on every provider.
pub(crate) const BASE_TIER: [(HealthDataType, QuantityType); 23] = [
    (HealthDataType::ActiveEnergyBurned, QuantityType::ActiveEnergyBurned),
    (HealthDataType::BasalEnergyBurned, QuantityType::BasalEnergyBurned),
    (HealthDataType::BloodGlucose, QuantityType::BloodGlucose),
    (HealthDataType::BloodOxygen, QuantityType::OxygenSaturation),
    (HealthDataType::BloodPressureDiastolic, QuantityType::BloodPressureDiastolic),
    (HealthDataType::BloodPressureSystolic, QuantityType::BloodPressureSystolic),
    (HealthDataType::BodyFatPercentage, QuantityType::BodyFatPercentage),
    (HealthDataType::BodyMassIndex, QuantityType::BodyMassIndex),
    (HealthDataType::BodyTemperature, QuantityType::BodyTemperature),
    (HealthDataType::ElectrodermalActivity, QuantityType::ElectrodermalActivity),
    (HealthDataType::HeartRate, QuantityType::HeartRate),
    (HealthDataType::HeartRateVariabilitySdnn, QuantityType::HeartRateVariabilitySdnn),
    (HealthDataType::Height, QuantityType::Height),
    (HealthDataType::RestingHeartRate, QuantityType::RestingHeartRate),
    (HealthDataType::Steps, QuantityType::StepCount),
    (HealthDataType::WaistCircumference, QuantityType::WaistCircumference),
    (HealthDataType::WalkingHeartRate, QuantityType::WalkingHeartRateAverage),
    (HealthDataType::Weight, QuantityType::BodyMass),
    (HealthDataType::DistanceWalkingRunning, QuantityType::DistanceWalkingRunning),
    (HealthDataType::FlightsClimbed, QuantityType::FlightsClimbed),
    (HealthDataType::DietaryFatTotal, QuantityType::DietaryFatTotal),
    (HealthDataType::DietaryProtein, QuantityType::DietaryProtein),
    (HealthDataType::DietaryCarbohydrates, QuantityType::DietaryCarbohydrates),
];

/// Category types that only exist when the provider reports heart-rhythm event support.
pub(crate) const HEART_RHYTHM_EVENT_TIER: [(HealthDataType, CategoryType); 3] = [
    (HealthDataType::HighHeartRateEvent, CategoryType::HighHeartRateEvent),
    (HealthDataType::LowHeartRateEvent, CategoryType::LowHeartRateEvent),
    (
        HealthDataType::IrregularHeartRateEvent,
        CategoryType::IrregularHeartRhythmEvent,
    ),
];
