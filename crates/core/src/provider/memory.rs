//! In-memory health provider.
//!
//! Holds samples in a process-local vector and evaluates queries the way a
//! platform store would (predicate, sort, limit). Used by the server binary
//! and as the test double for the translation layer. Every query and
//! authorization request is recorded so callers can inspect exactly what the
//! bridge handed to the provider.

use std::collections::HashSet;
use std::sync::{Mutex, RwLock};

use async_trait::async_trait;
use log::debug;
use uuid::Uuid;

use crate::errors::HealthError;
use crate::models::{ProviderSample, QuantitySample, SampleType, SampleValue};

use super::capabilities::ProviderCapabilities;
use super::query::SampleQuery;
use super::traits::HealthProvider;

const PROVIDER_ID: &str = "MEMORY";

/// How the store answers permission requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AuthorizationMode {
    #[default]
    Grant,
    Deny,
    /// The platform has no permission primitive at all.
    Unsupported,
}

/// One permission request as received by the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthorizationRecord {
    pub share: HashSet<SampleType>,
    pub read: HashSet<SampleType>,
}

pub struct InMemoryHealthStore {
    available: bool,
    capabilities: ProviderCapabilities,
    authorization: AuthorizationMode,
    query_failure: Option<String>,
    write_failure: Option<String>,
    samples: RwLock<Vec<ProviderSample>>,
    queries: Mutex<Vec<SampleQuery>>,
    authorization_requests: Mutex<Vec<AuthorizationRecord>>,
}

impl InMemoryHealthStore {
    /// An available store with every capability tier that grants all requests.
    pub fn new() -> Self {
        Self {
            available: true,
            capabilities: ProviderCapabilities::full(),
            authorization: AuthorizationMode::Grant,
            query_failure: None,
            write_failure: None,
            samples: RwLock::new(Vec::new()),
            queries: Mutex::new(Vec::new()),
            authorization_requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_availability(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    pub fn with_capabilities(mut self, capabilities: ProviderCapabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    pub fn with_authorization(mut self, mode: AuthorizationMode) -> Self {
        self.authorization = mode;
        self
    }

    /// Makes every query fail with the given diagnostic.
    pub fn failing_queries(mut self, message: impl Into<String>) -> Self {
        self.query_failure = Some(message.into());
        self
    }

    /// Makes every save fail with the given diagnostic.
    pub fn rejecting_writes(mut self, message: impl Into<String>) -> Self {
        self.write_failure = Some(message.into());
        self
    }

    /// Stores a sample directly, bypassing validation.
    pub fn insert(&self, sample: ProviderSample) -> Result<(), HealthError> {
        self.samples
            .write()
            .map_err(|_| Self::poisoned("sample store"))?
            .push(sample);
        Ok(())
    }

    pub fn samples(&self) -> Vec<ProviderSample> {
        self.samples.read().map(|s| s.clone()).unwrap_or_default()
    }

    /// Queries received so far, in arrival order.
    pub fn executed_queries(&self) -> Vec<SampleQuery> {
        self.queries.lock().map(|q| q.clone()).unwrap_or_default()
    }

    /// Permission requests received so far, in arrival order.
    pub fn authorization_requests(&self) -> Vec<AuthorizationRecord> {
        self.authorization_requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    fn poisoned(what: &str) -> HealthError {
        HealthError::provider(PROVIDER_ID, format!("{} lock poisoned", what))
    }
}

impl Default for InMemoryHealthStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HealthProvider for InMemoryHealthStore {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn capabilities(&self) -> ProviderCapabilities {
        self.capabilities.clone()
    }

    async fn request_authorization(
        &self,
        share: &HashSet<SampleType>,
        read: &HashSet<SampleType>,
    ) -> Result<bool, HealthError> {
        if self.authorization == AuthorizationMode::Unsupported {
            return Err(HealthError::ProviderUnavailable(
                "permission requests are not supported on this platform".to_string(),
            ));
        }

        self.authorization_requests
            .lock()
            .map_err(|_| Self::poisoned("authorization log"))?
            .push(AuthorizationRecord {
                share: share.clone(),
                read: read.clone(),
            });

        Ok(self.authorization == AuthorizationMode::Grant)
    }

    async fn execute_query(&self, query: &SampleQuery) -> Result<Vec<ProviderSample>, HealthError> {
        self.queries
            .lock()
            .map_err(|_| Self::poisoned("query log"))?
            .push(query.clone());

        if let Some(message) = &self.query_failure {
            return Err(HealthError::provider(PROVIDER_ID, message.clone()));
        }

        let mut matched: Vec<ProviderSample> = self
            .samples
            .read()
            .map_err(|_| Self::poisoned("sample store"))?
            .iter()
            .filter(|s| s.sample_type == query.sample_type && query.predicate.matches(s))
            .cloned()
            .collect();

        query.sort.apply(&mut matched);
        if let Some(limit) = query.limit {
            matched.truncate(limit);
        }

        debug!(
            "{} matched {} samples of {}",
            PROVIDER_ID,
            matched.len(),
            query.sample_type
        );
        Ok(matched)
    }

    async fn save_sample(&self, sample: QuantitySample) -> Result<(), HealthError> {
        if let Some(message) = &self.write_failure {
            return Err(HealthError::provider(PROVIDER_ID, message.clone()));
        }
        if sample.end < sample.start {
            return Err(HealthError::provider(
                PROVIDER_ID,
                "sample end date precedes its start date",
            ));
        }
        if sample.quantity.unit.dimension() != sample.quantity_type.dimension() {
            return Err(HealthError::provider(
                PROVIDER_ID,
                format!(
                    "unit '{}' is incompatible with {}",
                    sample.quantity.unit,
                    sample.quantity_type.identifier()
                ),
            ));
        }

        let stored = ProviderSample {
            uuid: Uuid::new_v4(),
            sample_type: SampleType::Quantity(sample.quantity_type),
            value: SampleValue::Quantity(sample.quantity),
            start: sample.start,
            end: sample.end,
        };
        self.samples
            .write()
            .map_err(|_| Self::poisoned("sample store"))?
            .push(stored);
        Ok(())
    }
}
