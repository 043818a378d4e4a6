//! Unit table: the unit each data type is read and written in.
//!
//! Built once per process via `lazy_static` and never mutated afterwards.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::models::{HealthDataType, MeasurementUnit};

/// Unit substituted for keys missing from the table under the fallback policy.
pub const FALLBACK_UNIT: MeasurementUnit = MeasurementUnit::Count;

lazy_static! {
    static ref UNIT_TABLE: HashMap<HealthDataType, MeasurementUnit> = {
        use HealthDataType::*;
        use MeasurementUnit as U;

        HashMap::from([
            (ActiveEnergyBurned, U::Kilocalorie),
            (BasalEnergyBurned, U::Kilocalorie),
            (BloodGlucose, U::MilligramPerDeciliter),
            (BloodOxygen, U::Percent),
            (BloodPressureDiastolic, U::MillimeterOfMercury),
            (BloodPressureSystolic, U::MillimeterOfMercury),
            (BodyFatPercentage, U::Percent),
            (BodyMassIndex, U::Scalar),
            (BodyTemperature, U::DegreeCelsius),
            (ElectrodermalActivity, U::Siemens),
            (HeartRate, U::CountPerMinute),
            (HeartRateVariabilitySdnn, U::Millisecond),
            (Height, U::Meter),
            (RestingHeartRate, U::CountPerMinute),
            (Steps, U::Count),
            (WaistCircumference, U::Meter),
            (WalkingHeartRate, U::CountPerMinute),
            (Weight, U::Kilogram),
            (DistanceWalkingRunning, U::Meter),
            (FlightsClimbed, U::Count),
            (DietaryFatTotal, U::Gram),
            (DietaryProtein, U::Gram),
            (DietaryCarbohydrates, U::Gram),
            // Heart-rhythm events carry a category value, reported as a count.
            (HighHeartRateEvent, U::Count),
            (LowHeartRateEvent, U::Count),
            (IrregularHeartRateEvent, U::Count),
        ])
    };
}

/// Looks up the unit registered for a data type.
pub fn unit_for(data_type: HealthDataType) -> Option<MeasurementUnit> {
    UNIT_TABLE.get(&data_type).copied()
}
