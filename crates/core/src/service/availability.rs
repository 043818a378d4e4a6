use std::sync::Arc;

use log::debug;

use crate::provider::HealthProvider;

/// Reports whether the provider is usable on this platform.
///
/// Callers are expected to check this before any other operation; the bridge
/// itself does not enforce the ordering.
pub struct AvailabilityGate {
    provider: Arc<dyn HealthProvider>,
}

impl AvailabilityGate {
    pub fn new(provider: Arc<dyn HealthProvider>) -> Self {
        Self { provider }
    }

    pub fn is_available(&self) -> bool {
        let available = self.provider.is_available();
        debug!("Provider '{}' available: {}", self.provider.id(), available);
        available
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::InMemoryHealthStore;

    #[test]
    fn test_reports_provider_state() {
        let present = AvailabilityGate::new(Arc::new(InMemoryHealthStore::new()));
        assert!(present.is_available());

        let absent =
            AvailabilityGate::new(Arc::new(InMemoryHealthStore::new().with_availability(false)));
        assert!(!absent.is_available());
    }
}
