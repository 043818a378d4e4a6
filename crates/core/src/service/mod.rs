//! Translation services.
//!
//! Each service performs exactly one provider operation per call:
//! - [`AvailabilityGate`] - provider presence check
//! - [`AuthorizationBroker`] - key sets to provider permission request
//! - [`QueryTranslator`] - read path, provider samples to normalized samples
//! - [`PersistTranslator`] - write path, request to provider sample

mod authorization;
mod availability;
mod read;
mod write;

pub use authorization::AuthorizationBroker;
pub use availability::AvailabilityGate;
pub use read::QueryTranslator;
pub use write::PersistTranslator;

use std::future::Future;
use std::time::Duration;

use crate::errors::{HealthError, Result};

/// Awaits a provider operation, bounded by `timeout` when one is configured.
pub(crate) async fn bounded<T, F>(operation: &str, timeout: Option<Duration>, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match timeout {
        None => fut.await,
        Some(limit) => tokio::time::timeout(limit, fut)
            .await
            .map_err(|_| HealthError::Timeout {
                operation: operation.to_string(),
                timeout_ms: limit.as_millis() as u64,
            })?,
    }
}
