//! Type registry resolving data type keys to provider types and units.
//!
//! The registry is built once from the provider's runtime capability query and
//! is immutable afterwards; lookups take `&self` and never lock. The only
//! mutable state is the fallback counter, an atomic.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, warn};

use super::types::{BASE_TIER, FALLBACK_QUANTITY_TYPE, HEART_RHYTHM_EVENT_TIER};
use super::units::{unit_for, FALLBACK_UNIT};
use crate::config::KeyPolicy;
use crate::errors::{HealthError, Result};
use crate::models::{CapabilityTier, HealthDataType, MeasurementUnit, QuantityType, SampleType};
use crate::provider::ProviderCapabilities;

const UNITS_TABLE: &str = "units";
const SAMPLE_TYPES_TABLE: &str = "sample types";
const WRITABLE_TYPES_TABLE: &str = "writable types";

pub struct TypeRegistry {
    policy: KeyPolicy,
    sample_types: HashMap<HealthDataType, SampleType>,
    writable_types: HashMap<HealthDataType, QuantityType>,
    fallback_hits: AtomicU64,
}

impl TypeRegistry {
    /// Builds the registry for a provider with the given capabilities.
    ///
    /// The base tier is always registered; other tiers only when reported.
    pub fn build(capabilities: &ProviderCapabilities, policy: KeyPolicy) -> Self {
        let mut sample_types = HashMap::new();
        let mut writable_types = HashMap::new();

        for (key, quantity_type) in BASE_TIER {
            sample_types.insert(key, SampleType::Quantity(quantity_type));
            writable_types.insert(key, quantity_type);
        }

        if capabilities.supports(CapabilityTier::HeartRhythmEvents) {
            for (key, category_type) in HEART_RHYTHM_EVENT_TIER {
                sample_types.insert(key, SampleType::Category(category_type));
            }
        } else {
            debug!("Provider does not report heart-rhythm events; tier not registered");
        }

        let registry = Self {
            policy,
            sample_types,
            writable_types,
            fallback_hits: AtomicU64::new(0),
        };

        for key in registry.unit_mismatches() {
            warn!("Registered type {} has no unit of a matching dimension", key);
        }

        debug!(
            "Type registry built with {} sample types ({} writable), policy {:?}",
            registry.sample_types.len(),
            registry.writable_types.len(),
            policy
        );
        registry
    }

    pub fn policy(&self) -> KeyPolicy {
        self.policy
    }

    /// Resolves the unit values of `key` are expressed in.
    pub fn resolve_unit(&self, key: &str) -> Result<MeasurementUnit> {
        match HealthDataType::from_key(key).and_then(unit_for) {
            Some(unit) => Ok(unit),
            None => self.miss(key, UNITS_TABLE, FALLBACK_UNIT),
        }
    }

    /// Resolves the provider type to read or authorize for `key`.
    pub fn resolve_sample_type(&self, key: &str) -> Result<SampleType> {
        match HealthDataType::from_key(key).and_then(|k| self.sample_types.get(&k)) {
            Some(sample_type) => Ok(*sample_type),
            None => self.miss(
                key,
                SAMPLE_TYPES_TABLE,
                SampleType::Quantity(FALLBACK_QUANTITY_TYPE),
            ),
        }
    }

    /// Resolves the quantity type new samples of `key` are stored as.
    ///
    /// Category types are never writable.
    pub fn resolve_writable_type(&self, key: &str) -> Result<QuantityType> {
        match HealthDataType::from_key(key).and_then(|k| self.writable_types.get(&k)) {
            Some(quantity_type) => Ok(*quantity_type),
            None => self.miss(key, WRITABLE_TYPES_TABLE, FALLBACK_QUANTITY_TYPE),
        }
    }

    /// Every sample type registered for the current capability set.
    pub fn all_sample_types(&self) -> HashSet<SampleType> {
        self.sample_types.values().copied().collect()
    }

    /// Registered keys in enumeration order.
    pub fn registered_keys(&self) -> Vec<HealthDataType> {
        HealthDataType::ALL
            .into_iter()
            .filter(|k| self.sample_types.contains_key(k))
            .collect()
    }

    pub fn is_registered(&self, data_type: HealthDataType) -> bool {
        self.sample_types.contains_key(&data_type)
    }

    /// Number of lookups answered with a fallback since the registry was built.
    pub fn fallback_count(&self) -> u64 {
        self.fallback_hits.load(Ordering::Relaxed)
    }

    /// Registered quantity types whose unit is missing or of another dimension.
    fn unit_mismatches(&self) -> Vec<HealthDataType> {
        let mut mismatches: Vec<HealthDataType> = self
            .writable_types
            .iter()
            .filter(|(key, quantity_type)| {
                unit_for(**key).map(|u| u.dimension()) != Some(quantity_type.dimension())
            })
            .map(|(key, _)| *key)
            .collect();
        mismatches.sort();
        mismatches
    }

    fn miss<T: std::fmt::Debug>(&self, key: &str, table: &str, fallback: T) -> Result<T> {
        match self.policy {
            KeyPolicy::Strict => Err(HealthError::unresolved(key, table)),
            KeyPolicy::Fallback => {
                self.fallback_hits.fetch_add(1, Ordering::Relaxed);
                warn!(
                    "Key '{}' not found in {}, falling back to {:?}",
                    key, table, fallback
                );
                Ok(fallback)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryType;

    fn full() -> TypeRegistry {
        TypeRegistry::build(&ProviderCapabilities::full(), KeyPolicy::Fallback)
    }

    #[test]
    fn test_known_keys_resolve() {
        let registry = full();
        assert_eq!(
            registry.resolve_sample_type("STEPS").unwrap(),
            SampleType::Quantity(QuantityType::StepCount)
        );
        assert_eq!(
            registry.resolve_writable_type("BLOOD_OXYGEN").unwrap(),
            QuantityType::OxygenSaturation
        );
        assert_eq!(
            registry.resolve_unit("HEART_RATE_VARIABILITY_SDNN").unwrap(),
            MeasurementUnit::Millisecond
        );
        assert_eq!(
            registry.resolve_sample_type("IRREGULAR_HEART_RATE_EVENT").unwrap(),
            SampleType::Category(CategoryType::IrregularHeartRhythmEvent)
        );
        assert_eq!(registry.fallback_count(), 0);
    }

    #[test]
    fn test_unknown_key_falls_back_and_is_counted() {
        let registry = full();
        assert_eq!(
            registry.resolve_sample_type("NOT_A_REAL_KEY").unwrap(),
            SampleType::Quantity(QuantityType::BodyMass)
        );
        assert_eq!(
            registry.resolve_writable_type("NOT_A_REAL_KEY").unwrap(),
            QuantityType::BodyMass
        );
        assert_eq!(
            registry.resolve_unit("NOT_A_REAL_KEY").unwrap(),
            MeasurementUnit::Count
        );
        assert_eq!(registry.fallback_count(), 3);
    }

    #[test]
    fn test_strict_policy_rejects_unknown_key() {
        let registry = TypeRegistry::build(&ProviderCapabilities::full(), KeyPolicy::Strict);
        let err = registry.resolve_unit("NOT_A_REAL_KEY").unwrap_err();
        assert_eq!(err, HealthError::unresolved("NOT_A_REAL_KEY", "units"));
        assert_eq!(registry.fallback_count(), 0);
    }

    #[test]
    fn test_event_types_are_not_writable() {
        let strict = TypeRegistry::build(&ProviderCapabilities::full(), KeyPolicy::Strict);
        assert!(strict.resolve_sample_type("HIGH_HEART_RATE_EVENT").is_ok());
        let err = strict.resolve_writable_type("HIGH_HEART_RATE_EVENT").unwrap_err();
        assert_eq!(
            err,
            HealthError::unresolved("HIGH_HEART_RATE_EVENT", "writable types")
        );
    }

    #[test]
    fn test_event_tier_requires_capability() {
        let registry = TypeRegistry::build(&ProviderCapabilities::base_only(), KeyPolicy::Strict);
        assert!(!registry.is_registered(HealthDataType::LowHeartRateEvent));
        assert!(registry.resolve_sample_type("LOW_HEART_RATE_EVENT").is_err());
        assert_eq!(registry.registered_keys().len(), 23);
        assert_eq!(registry.all_sample_types().len(), 23);
    }

    #[test]
    fn test_full_registry_counts() {
        let registry = full();
        assert_eq!(registry.registered_keys().len(), 26);
        assert_eq!(registry.all_sample_types().len(), 26);
    }

    #[test]
    fn test_units_match_type_dimensions() {
        assert!(full().unit_mismatches().is_empty());
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let registry = full();
        for data_type in HealthDataType::ALL {
            let key = data_type.as_str();
            assert_eq!(
                registry.resolve_sample_type(key).unwrap(),
                registry.resolve_sample_type(key).unwrap()
            );
            assert_eq!(
                registry.resolve_unit(key).unwrap(),
                registry.resolve_unit(key).unwrap()
            );
        }
    }
}
