//! Health provider trait definitions.
//!
//! This module defines the `HealthProvider` trait: the outbound surface the
//! bridge consumes. A provider owns sample storage, the native query engine
//! and the permission system; the bridge only translates requests into calls
//! on this trait.

use std::collections::HashSet;

use async_trait::async_trait;

use crate::errors::HealthError;
use crate::models::{ProviderSample, QuantitySample, SampleType};

use super::capabilities::ProviderCapabilities;
use super::query::SampleQuery;

/// Trait for health data providers.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use healthbridge_core::provider::{HealthProvider, ProviderCapabilities, SampleQuery};
///
/// struct MyStore;
///
/// #[async_trait]
/// impl HealthProvider for MyStore {
///     fn id(&self) -> &'static str {
///         "MY_STORE"
///     }
///
///     fn is_available(&self) -> bool {
///         true
///     }
///
///     fn capabilities(&self) -> ProviderCapabilities {
///         ProviderCapabilities::base_only()
///     }
///
///     // ... implement execute_query and save_sample
/// }
/// ```
#[async_trait]
pub trait HealthProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs and error messages.
    fn id(&self) -> &'static str;

    /// Whether health data is usable on this platform. Must not fail.
    fn is_available(&self) -> bool;

    /// The capability tiers present on the running platform.
    fn capabilities(&self) -> ProviderCapabilities;

    /// Asks the user for access to the given type sets.
    ///
    /// `share` holds types to write, `read` types to read. Returns the
    /// provider's single success flag; individual grants are not reported.
    /// The default implementation reports that the permission primitive is
    /// missing on this platform.
    async fn request_authorization(
        &self,
        share: &HashSet<SampleType>,
        read: &HashSet<SampleType>,
    ) -> Result<bool, HealthError> {
        let _ = (share, read);
        Err(HealthError::ProviderUnavailable(format!(
            "{} has no permission request primitive",
            self.id()
        )))
    }

    /// Executes a sample query.
    ///
    /// Samples should honour the query's predicate, sort and limit.
    async fn execute_query(&self, query: &SampleQuery) -> Result<Vec<ProviderSample>, HealthError>;

    /// Persists one new sample.
    async fn save_sample(&self, sample: QuantitySample) -> Result<(), HealthError>;
}
