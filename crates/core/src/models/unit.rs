use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::HealthError;

/// Physical dimension of a unit. Values only convert within one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Count,
    Frequency,
    Energy,
    MassConcentration,
    Fraction,
    Pressure,
    Scalar,
    Temperature,
    Conductance,
    Time,
    Length,
    Mass,
}

/// Measurement unit understood by the provider.
///
/// The textual form follows the provider's unit strings (`"count/min"`, `"mg/dL"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasurementUnit {
    Count,
    CountPerMinute,
    Kilocalorie,
    Kilojoule,
    MilligramPerDeciliter,
    Percent,
    MillimeterOfMercury,
    Scalar,
    DegreeCelsius,
    DegreeFahrenheit,
    Siemens,
    Microsiemens,
    Millisecond,
    Second,
    Meter,
    Centimeter,
    Kilogram,
    Gram,
    Pound,
}

impl MeasurementUnit {
    pub const ALL: [MeasurementUnit; 19] = [
        Self::Count,
        Self::CountPerMinute,
        Self::Kilocalorie,
        Self::Kilojoule,
        Self::MilligramPerDeciliter,
        Self::Percent,
        Self::MillimeterOfMercury,
        Self::Scalar,
        Self::DegreeCelsius,
        Self::DegreeFahrenheit,
        Self::Siemens,
        Self::Microsiemens,
        Self::Millisecond,
        Self::Second,
        Self::Meter,
        Self::Centimeter,
        Self::Kilogram,
        Self::Gram,
        Self::Pound,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Count => "count",
            Self::CountPerMinute => "count/min",
            Self::Kilocalorie => "kcal",
            Self::Kilojoule => "kJ",
            Self::MilligramPerDeciliter => "mg/dL",
            Self::Percent => "%",
            Self::MillimeterOfMercury => "mmHg",
            Self::Scalar => "",
            Self::DegreeCelsius => "degC",
            Self::DegreeFahrenheit => "degF",
            Self::Siemens => "S",
            Self::Microsiemens => "mcS",
            Self::Millisecond => "ms",
            Self::Second => "s",
            Self::Meter => "m",
            Self::Centimeter => "cm",
            Self::Kilogram => "kg",
            Self::Gram => "g",
            Self::Pound => "lb",
        }
    }

    pub fn dimension(&self) -> Dimension {
        match self {
            Self::Count => Dimension::Count,
            Self::CountPerMinute => Dimension::Frequency,
            Self::Kilocalorie | Self::Kilojoule => Dimension::Energy,
            Self::MilligramPerDeciliter => Dimension::MassConcentration,
            Self::Percent => Dimension::Fraction,
            Self::MillimeterOfMercury => Dimension::Pressure,
            Self::Scalar => Dimension::Scalar,
            Self::DegreeCelsius | Self::DegreeFahrenheit => Dimension::Temperature,
            Self::Siemens | Self::Microsiemens => Dimension::Conductance,
            Self::Millisecond | Self::Second => Dimension::Time,
            Self::Meter | Self::Centimeter => Dimension::Length,
            Self::Kilogram | Self::Gram | Self::Pound => Dimension::Mass,
        }
    }

    /// Linear mapping `base = value * scale + offset` onto the dimension's base unit.
    fn to_base_coefficients(self) -> (f64, f64) {
        match self {
            Self::Kilojoule => (1.0 / 4.184, 0.0),
            Self::DegreeFahrenheit => (5.0 / 9.0, -32.0 * 5.0 / 9.0),
            Self::Microsiemens => (1e-6, 0.0),
            Self::Second => (1000.0, 0.0),
            Self::Centimeter => (0.01, 0.0),
            Self::Gram => (0.001, 0.0),
            Self::Pound => (0.453_592_37, 0.0),
            _ => (1.0, 0.0),
        }
    }

    /// Converts `value` expressed in `self` into `target`.
    pub fn convert(&self, value: f64, target: MeasurementUnit) -> Result<f64, HealthError> {
        if *self == target {
            return Ok(value);
        }
        if self.dimension() != target.dimension() {
            return Err(HealthError::IncompatibleUnits {
                from: self.symbol().to_string(),
                to: target.symbol().to_string(),
            });
        }
        let (scale, offset) = self.to_base_coefficients();
        let base = value * scale + offset;
        let (target_scale, target_offset) = target.to_base_coefficients();
        Ok((base - target_offset) / target_scale)
    }
}

impl fmt::Display for MeasurementUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for MeasurementUnit {
    type Err = HealthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|u| u.symbol() == s)
            .ok_or_else(|| HealthError::invalid_argument("unit", format!("unknown unit '{}'", s)))
    }
}

impl Serialize for MeasurementUnit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

impl<'de> Deserialize<'de> for MeasurementUnit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A numeric value tagged with its unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub value: f64,
    pub unit: MeasurementUnit,
}

impl Quantity {
    pub fn new(value: f64, unit: MeasurementUnit) -> Self {
        Self { value, unit }
    }

    /// The numeric value of this quantity expressed in `unit`.
    pub fn value_in(&self, unit: MeasurementUnit) -> Result<f64, HealthError> {
        self.unit.convert(self.value, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_same_unit_is_identity() {
        let q = Quantity::new(72.0, MeasurementUnit::CountPerMinute);
        assert_eq!(q.value_in(MeasurementUnit::CountPerMinute).unwrap(), 72.0);
    }

    #[test]
    fn test_mass_conversion() {
        let q = Quantity::new(1500.0, MeasurementUnit::Gram);
        assert_close(q.value_in(MeasurementUnit::Kilogram).unwrap(), 1.5);

        let q = Quantity::new(10.0, MeasurementUnit::Pound);
        assert_close(q.value_in(MeasurementUnit::Kilogram).unwrap(), 4.5359237);
    }

    #[test]
    fn test_temperature_conversion_uses_offset() {
        let q = Quantity::new(98.6, MeasurementUnit::DegreeFahrenheit);
        assert_close(q.value_in(MeasurementUnit::DegreeCelsius).unwrap(), 37.0);

        let q = Quantity::new(100.0, MeasurementUnit::DegreeCelsius);
        assert_close(q.value_in(MeasurementUnit::DegreeFahrenheit).unwrap(), 212.0);
    }

    #[test]
    fn test_energy_and_time_conversion() {
        let q = Quantity::new(4.184, MeasurementUnit::Kilojoule);
        assert_close(q.value_in(MeasurementUnit::Kilocalorie).unwrap(), 1.0);

        let q = Quantity::new(0.045, MeasurementUnit::Second);
        assert_close(q.value_in(MeasurementUnit::Millisecond).unwrap(), 45.0);
    }

    #[test]
    fn test_cross_dimension_fails() {
        let q = Quantity::new(1.0, MeasurementUnit::Count);
        let err = q.value_in(MeasurementUnit::Kilogram).unwrap_err();
        assert!(matches!(err, HealthError::IncompatibleUnits { .. }));
    }

    #[test]
    fn test_symbols_parse_back() {
        for unit in MeasurementUnit::ALL {
            assert_eq!(unit.symbol().parse::<MeasurementUnit>().unwrap(), unit);
        }
        assert!("furlong".parse::<MeasurementUnit>().is_err());
    }

    #[test]
    fn test_unit_serializes_as_symbol() {
        let json = serde_json::to_string(&MeasurementUnit::MilligramPerDeciliter).unwrap();
        assert_eq!(json, "\"mg/dL\"");
    }
}
