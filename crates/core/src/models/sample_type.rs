use std::fmt;

use serde::{Deserialize, Serialize};

use super::unit::Dimension;

/// Provider quantity types: measurable values carrying a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum QuantityType {
    ActiveEnergyBurned,
    BasalEnergyBurned,
    BloodGlucose,
    OxygenSaturation,
    BloodPressureDiastolic,
    BloodPressureSystolic,
    BodyFatPercentage,
    BodyMassIndex,
    BodyTemperature,
    ElectrodermalActivity,
    HeartRate,
    HeartRateVariabilitySdnn,
    Height,
    RestingHeartRate,
    StepCount,
    WaistCircumference,
    WalkingHeartRateAverage,
    BodyMass,
    DistanceWalkingRunning,
    FlightsClimbed,
    DietaryFatTotal,
    DietaryProtein,
    DietaryCarbohydrates,
}

impl QuantityType {
    pub fn identifier(&self) -> &'static str {
        match self {
            Self::ActiveEnergyBurned => "HKQuantityTypeIdentifierActiveEnergyBurned",
            Self::BasalEnergyBurned => "HKQuantityTypeIdentifierBasalEnergyBurned",
            Self::BloodGlucose => "HKQuantityTypeIdentifierBloodGlucose",
            Self::OxygenSaturation => "HKQuantityTypeIdentifierOxygenSaturation",
            Self::BloodPressureDiastolic => "HKQuantityTypeIdentifierBloodPressureDiastolic",
            Self::BloodPressureSystolic => "HKQuantityTypeIdentifierBloodPressureSystolic",
            Self::BodyFatPercentage => "HKQuantityTypeIdentifierBodyFatPercentage",
            Self::BodyMassIndex => "HKQuantityTypeIdentifierBodyMassIndex",
            Self::BodyTemperature => "HKQuantityTypeIdentifierBodyTemperature",
            Self::ElectrodermalActivity => "HKQuantityTypeIdentifierElectrodermalActivity",
            Self::HeartRate => "HKQuantityTypeIdentifierHeartRate",
            Self::HeartRateVariabilitySdnn => "HKQuantityTypeIdentifierHeartRateVariabilitySDNN",
            Self::Height => "HKQuantityTypeIdentifierHeight",
            Self::RestingHeartRate => "HKQuantityTypeIdentifierRestingHeartRate",
            Self::StepCount => "HKQuantityTypeIdentifierStepCount",
            Self::WaistCircumference => "HKQuantityTypeIdentifierWaistCircumference",
            Self::WalkingHeartRateAverage => "HKQuantityTypeIdentifierWalkingHeartRateAverage",
            Self::BodyMass => "HKQuantityTypeIdentifierBodyMass",
            Self::DistanceWalkingRunning => "HKQuantityTypeIdentifierDistanceWalkingRunning",
            Self::FlightsClimbed => "HKQuantityTypeIdentifierFlightsClimbed",
            Self::DietaryFatTotal => "HKQuantityTypeIdentifierDietaryFatTotal",
            Self::DietaryProtein => "HKQuantityTypeIdentifierDietaryProtein",
            Self::DietaryCarbohydrates => "HKQuantityTypeIdentifierDietaryCarbohydrates",
        }
    }

    /// The dimension values of this type must be expressed in.
    pub fn dimension(&self) -> Dimension {
        match self {
            Self::ActiveEnergyBurned | Self::BasalEnergyBurned => Dimension::Energy,
            Self::BloodGlucose => Dimension::MassConcentration,
            Self::OxygenSaturation | Self::BodyFatPercentage => Dimension::Fraction,
            Self::BloodPressureDiastolic | Self::BloodPressureSystolic => Dimension::Pressure,
            Self::BodyMassIndex => Dimension::Scalar,
            Self::BodyTemperature => Dimension::Temperature,
            Self::ElectrodermalActivity => Dimension::Conductance,
            Self::HeartRate | Self::RestingHeartRate | Self::WalkingHeartRateAverage => {
                Dimension::Frequency
            }
            Self::HeartRateVariabilitySdnn => Dimension::Time,
            Self::Height | Self::WaistCircumference | Self::DistanceWalkingRunning => {
                Dimension::Length
            }
            Self::StepCount | Self::FlightsClimbed => Dimension::Count,
            Self::BodyMass
            | Self::DietaryFatTotal
            | Self::DietaryProtein
            | Self::DietaryCarbohydrates => Dimension::Mass,
        }
    }
}

/// Provider category types: discrete events without a physical unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CategoryType {
    HighHeartRateEvent,
    LowHeartRateEvent,
    IrregularHeartRhythmEvent,
}

impl CategoryType {
    pub fn identifier(&self) -> &'static str {
        match self {
            Self::HighHeartRateEvent => "HKCategoryTypeIdentifierHighHeartRateEvent",
            Self::LowHeartRateEvent => "HKCategoryTypeIdentifierLowHeartRateEvent",
            Self::IrregularHeartRhythmEvent => "HKCategoryTypeIdentifierIrregularHeartRhythmEvent",
        }
    }
}

/// Descriptor of a provider sample type, either a quantity or a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", content = "type", rename_all = "lowercase")]
pub enum SampleType {
    Quantity(QuantityType),
    Category(CategoryType),
}

impl SampleType {
    pub fn identifier(&self) -> &'static str {
        match self {
            Self::Quantity(q) => q.identifier(),
            Self::Category(c) => c.identifier(),
        }
    }

    pub fn is_quantity(&self) -> bool {
        matches!(self, Self::Quantity(_))
    }
}

impl From<QuantityType> for SampleType {
    fn from(value: QuantityType) -> Self {
        Self::Quantity(value)
    }
}

impl From<CategoryType> for SampleType {
    fn from(value: CategoryType) -> Self {
        Self::Category(value)
    }
}

impl fmt::Display for SampleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}
