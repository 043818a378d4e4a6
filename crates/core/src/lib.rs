//! Healthbridge Core Crate
//!
//! This crate translates platform-independent health data requests into
//! operations against a health provider.
//!
//! # Overview
//!
//! The bridge supports:
//! - A registry of health data type keys (STEPS, HEART_RATE, ...) resolved
//!   to provider sample types and measurement units
//! - Capability tiers, so newer types only register on providers that have them
//! - Authorization requests, time-ranged reads and single-sample writes
//! - A method dispatcher for channel-style callers (name + JSON arguments)
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |  Channel caller  | --> | HealthDispatcher |  (method name + JSON args)
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |   TypeRegistry   |  (key -> sample type, unit)
//!                          +------------------+
//!                                  |
//!                                  v
//!                     +-------------------------+
//!                     | Query/Persist translator|  (SampleQuery, QuantitySample)
//!                     +-------------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |  HealthProvider  |  (platform store)
//!                          +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`HealthDataType`] - Platform-independent data type key
//! - [`SampleType`] - Provider sample type descriptor
//! - [`MeasurementUnit`] - Unit a key is read and written in
//! - [`Sample`] - Normalized sample returned to callers
//! - [`TimeRange`] - Millisecond epoch range of a request

pub mod config;
pub mod dispatcher;
pub mod errors;
pub mod models;
pub mod provider;
pub mod registry;
pub mod service;

pub use config::{BridgeConfig, KeyPolicy};

pub use dispatcher::{HealthDispatcher, HealthMethod};

pub use errors::{HealthError, Result};

pub use models::{
    CapabilityTier, CategoryType, Dimension, HealthDataType, MeasurementUnit, ProviderSample,
    Quantity, QuantitySample, QuantityType, Sample, SampleType, SampleValue, TimeRange,
};

pub use provider::{
    AuthorizationMode, HealthProvider, InMemoryHealthStore, ProviderCapabilities, SampleQuery,
};

pub use registry::{TypeRegistry, FALLBACK_QUANTITY_TYPE, FALLBACK_UNIT};

pub use service::{AuthorizationBroker, AvailabilityGate, PersistTranslator, QueryTranslator};
