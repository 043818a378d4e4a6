//! Health data models
//!
//! This module contains the core data types of the bridge:
//! - `data_type` - Platform-independent type keys (HealthDataType) and capability tiers
//! - `sample_type` - Provider sample type descriptors (SampleType, QuantityType, CategoryType)
//! - `unit` - Measurement units, dimensions and quantities
//! - `sample` - Normalized samples and provider-side sample records
//! - `time_range` - Millisecond time ranges

mod data_type;
mod sample;
mod sample_type;
mod time_range;
mod unit;

pub use data_type::{CapabilityTier, HealthDataType};
pub use sample::{ProviderSample, QuantitySample, Sample, SampleValue};
pub use sample_type::{CategoryType, QuantityType, SampleType};
pub use time_range::TimeRange;
pub use unit::{Dimension, MeasurementUnit, Quantity};
