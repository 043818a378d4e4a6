use std::sync::Arc;
use std::time::Duration;

use log::{info, warn};

use super::bounded;
use crate::errors::{HealthError, Result};
use crate::models::{Quantity, QuantitySample, TimeRange};
use crate::provider::HealthProvider;
use crate::registry::TypeRegistry;

/// Write path: turns a (key, range, value) request into one provider sample.
pub struct PersistTranslator {
    registry: Arc<TypeRegistry>,
    provider: Arc<dyn HealthProvider>,
    timeout: Option<Duration>,
}

impl PersistTranslator {
    pub fn new(
        registry: Arc<TypeRegistry>,
        provider: Arc<dyn HealthProvider>,
        timeout: Option<Duration>,
    ) -> Self {
        Self {
            registry,
            provider,
            timeout,
        }
    }

    /// Builds the sample that would be submitted for `key`.
    pub fn build_sample(&self, key: &str, range: TimeRange, value: f64) -> Result<QuantitySample> {
        let quantity_type = self.registry.resolve_writable_type(key)?;
        let unit = self.registry.resolve_unit(key)?;
        let (start, end) = range.to_datetimes()?;
        Ok(QuantitySample::new(
            quantity_type,
            Quantity::new(value, unit),
            start,
            end,
        ))
    }

    /// Stores `value` for `key` over `range`.
    ///
    /// Returns `Ok(())` only once the provider confirms the save. A provider
    /// rejection is logged and returned as [`HealthError::PersistFailed`].
    pub async fn write(&self, key: &str, range: TimeRange, value: f64) -> Result<()> {
        let sample = self.build_sample(key, range, value)?;
        let quantity_type = sample.quantity_type;

        match bounded("writeData", self.timeout, self.provider.save_sample(sample)).await {
            Ok(()) => {
                info!(
                    "Saved {} sample ({}) over [{}, {}]",
                    key,
                    quantity_type.identifier(),
                    range.start_ms,
                    range.end_ms
                );
                Ok(())
            }
            Err(e @ HealthError::Timeout { .. }) => Err(e),
            Err(e) => {
                let message = match e {
                    HealthError::Provider { message, .. } => message,
                    other => other.to_string(),
                };
                warn!("Error saving {} sample: {}", key, message);
                Err(HealthError::PersistFailed {
                    data_type: key.to_string(),
                    message,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KeyPolicy;
    use crate::models::{MeasurementUnit, QuantityType, SampleType, SampleValue};
    use crate::provider::InMemoryHealthStore;

    fn translator(store: Arc<InMemoryHealthStore>, policy: KeyPolicy) -> PersistTranslator {
        let registry = Arc::new(TypeRegistry::build(&store.capabilities(), policy));
        PersistTranslator::new(registry, store, None)
    }

    #[tokio::test]
    async fn test_write_stores_sample_in_registered_unit() {
        let store = Arc::new(InMemoryHealthStore::new());
        translator(store.clone(), KeyPolicy::Fallback)
            .write("DIETARY_PROTEIN", TimeRange::new(1_000, 2_000), 35.0)
            .await
            .unwrap();

        let stored = store.samples();
        assert_eq!(stored.len(), 1);
        assert_eq!(
            stored[0].sample_type,
            SampleType::Quantity(QuantityType::DietaryProtein)
        );
        assert_eq!(
            stored[0].value,
            SampleValue::Quantity(Quantity::new(35.0, MeasurementUnit::Gram))
        );
        assert_eq!(stored[0].start.timestamp_millis(), 1_000);
        assert_eq!(stored[0].end.timestamp_millis(), 2_000);
    }

    #[tokio::test]
    async fn test_provider_rejection_is_persist_failed() {
        let store = Arc::new(InMemoryHealthStore::new().rejecting_writes("Not authorized"));
        let err = translator(store, KeyPolicy::Fallback)
            .write("STEPS", TimeRange::new(0, 1), 10.0)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            HealthError::PersistFailed {
                data_type: "STEPS".to_string(),
                message: "Not authorized".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_key_builds_fallback_sample() {
        let store = Arc::new(InMemoryHealthStore::new());
        let sample = translator(store, KeyPolicy::Fallback)
            .build_sample("NOT_A_REAL_KEY", TimeRange::new(0, 1), 5.0)
            .unwrap();
        assert_eq!(sample.quantity_type, QuantityType::BodyMass);
        assert_eq!(sample.quantity.unit, MeasurementUnit::Count);
    }

    #[tokio::test]
    async fn test_strict_policy_rejects_event_write() {
        let store = Arc::new(InMemoryHealthStore::new());
        let err = translator(store.clone(), KeyPolicy::Strict)
            .write("LOW_HEART_RATE_EVENT", TimeRange::new(0, 1), 1.0)
            .await
            .unwrap_err();
        assert!(matches!(err, HealthError::UnresolvedKey { .. }));
        assert!(store.samples().is_empty());
    }
}
