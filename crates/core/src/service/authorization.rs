use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use log::{info, warn};

use super::bounded;
use crate::errors::{HealthError, Result};
use crate::models::SampleType;
use crate::provider::HealthProvider;
use crate::registry::TypeRegistry;

/// Translates read/write key lists into a provider permission request.
///
/// The result is the provider's coarse success flag. Platforms withhold which
/// individual types were granted, so partial grants are not visible here.
pub struct AuthorizationBroker {
    registry: Arc<TypeRegistry>,
    provider: Arc<dyn HealthProvider>,
    timeout: Option<Duration>,
}

impl AuthorizationBroker {
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

    /// Requests access to read `read_keys` and write `write_keys`.
    ///
    /// Empty sets are still forwarded. Unknown keys follow the registry's key
    /// policy, so under the fallback policy a malformed key requests access to
    /// the fallback type. A missing permission primitive or a provider error
    /// yields `Ok(false)`.
    pub async fn request<S: AsRef<str>>(&self, read_keys: &[S], write_keys: &[S]) -> Result<bool> {
        let read = self.resolve_all(read_keys)?;
        let share = self.resolve_all(write_keys)?;

        let outcome = bounded(
            "requestAuthorization",
            self.timeout,
            self.provider.request_authorization(&share, &read),
        )
        .await;

        match outcome {
            Ok(granted) => {
                info!(
                    "Authorization for {} read / {} write types: {}",
                    read.len(),
                    share.len(),
                    granted
                );
                Ok(granted)
            }
            Err(HealthError::ProviderUnavailable(reason)) => {
                warn!("Authorization unavailable: {}", reason);
                Ok(false)
            }
            Err(e @ HealthError::Timeout { .. }) => Err(e),
            Err(e) => {
                warn!("Authorization request failed: {}", e);
                Ok(false)
            }
        }
    }

    fn resolve_all<S: AsRef<str>>(&self, keys: &[S]) -> Result<HashSet<SampleType>> {
        keys.iter()
            .map(|k| self.registry.resolve_sample_type(k.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KeyPolicy;
    use crate::models::QuantityType;
    use crate::provider::{AuthorizationMode, InMemoryHealthStore, ProviderCapabilities};

    fn broker(store: Arc<InMemoryHealthStore>, policy: KeyPolicy) -> AuthorizationBroker {
        let registry = Arc::new(TypeRegistry::build(&store.capabilities(), policy));
        AuthorizationBroker::new(registry, store, None)
    }

    #[tokio::test]
    async fn test_resolves_keys_into_type_sets() {
        let store = Arc::new(InMemoryHealthStore::new());
        let broker = broker(store.clone(), KeyPolicy::Fallback);

        let granted = broker
            .request(&["STEPS", "HEART_RATE", "STEPS"], &["WEIGHT"])
            .await
            .unwrap();
        assert!(granted);

        let requests = store.authorization_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].read,
            HashSet::from([
                SampleType::Quantity(QuantityType::StepCount),
                SampleType::Quantity(QuantityType::HeartRate),
            ])
        );
        assert_eq!(
            requests[0].share,
            HashSet::from([SampleType::Quantity(QuantityType::BodyMass)])
        );
    }

    #[tokio::test]
    async fn test_empty_sets_still_reach_provider() {
        let store = Arc::new(InMemoryHealthStore::new());
        let broker = broker(store.clone(), KeyPolicy::Fallback);
        let empty: [&str; 0] = [];

        assert!(broker.request(&empty, &empty).await.unwrap());
        let requests = store.authorization_requests();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].read.is_empty());
        assert!(requests[0].share.is_empty());
    }

    #[tokio::test]
    async fn test_missing_primitive_is_false() {
        let store = Arc::new(
            InMemoryHealthStore::new()
                .with_capabilities(ProviderCapabilities::base_only())
                .with_authorization(AuthorizationMode::Unsupported),
        );
        let broker = broker(store, KeyPolicy::Fallback);
        assert!(!broker.request(&["STEPS"], &["STEPS"]).await.unwrap());
    }

    #[tokio::test]
    async fn test_denial_is_false() {
        let store = Arc::new(InMemoryHealthStore::new().with_authorization(AuthorizationMode::Deny));
        let broker = broker(store, KeyPolicy::Fallback);
        assert!(!broker.request(&["STEPS"], &[]).await.unwrap());
    }

    #[tokio::test]
    async fn test_unknown_key_requests_fallback_type() {
        let store = Arc::new(InMemoryHealthStore::new());
        let broker = broker(store.clone(), KeyPolicy::Fallback);
        broker.request(&["NOT_A_REAL_KEY"], &[]).await.unwrap();
        assert_eq!(
            store.authorization_requests()[0].read,
            HashSet::from([SampleType::Quantity(QuantityType::BodyMass)])
        );
    }

    #[tokio::test]
    async fn test_strict_policy_fails_before_provider() {
        let store = Arc::new(InMemoryHealthStore::new());
        let broker = broker(store.clone(), KeyPolicy::Strict);
        let err = broker.request(&["NOT_A_REAL_KEY"], &[]).await.unwrap_err();
        assert!(matches!(err, HealthError::UnresolvedKey { .. }));
        assert!(store.authorization_requests().is_empty());
    }
}
