use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};

use super::bounded;
use crate::errors::{HealthError, Result};
use crate::models::{MeasurementUnit, ProviderSample, Sample, SampleType, SampleValue, TimeRange};
use crate::provider::{HealthProvider, SamplePredicate, SampleQuery, SortDescriptor};
use crate::registry::TypeRegistry;

/// Read path: turns a (key, range) request into a provider query and
/// normalizes the returned samples.
pub struct QueryTranslator {
    registry: Arc<TypeRegistry>,
    provider: Arc<dyn HealthProvider>,
    timeout: Option<Duration>,
}

impl QueryTranslator {
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

    /// Builds the provider query for `key` over exactly the given bounds.
    ///
    /// Samples must start within `[start, end)`, are sorted by ascending end
    /// date and are not limited in number. Inverted ranges are not reordered.
    pub fn build_query(&self, key: &str, range: TimeRange) -> Result<SampleQuery> {
        let sample_type = self.registry.resolve_sample_type(key)?;
        let (start, end) = range.to_datetimes()?;
        Ok(SampleQuery {
            sample_type,
            predicate: SamplePredicate::strict_start(start, end),
            sort: SortDescriptor::end_date_ascending(),
            limit: None,
        })
    }

    /// Reads the samples of `key` within `range`.
    ///
    /// Fails with [`HealthError::QueryFailed`] when the provider errors or
    /// returns samples of the wrong kind; never degrades to an empty result.
    pub async fn query(&self, key: &str, range: TimeRange) -> Result<Vec<Sample>> {
        let query = self.build_query(key, range)?;
        let unit = self.registry.resolve_unit(key)?;

        if range.is_inverted() {
            debug!(
                "Inverted range [{}, {}] for {} passed to provider as given",
                range.start_ms, range.end_ms, key
            );
        }

        let mut provider_samples = bounded(
            "getData",
            self.timeout,
            self.provider.execute_query(&query),
        )
        .await
        .map_err(|e| match e {
            HealthError::Timeout { .. } => e,
            other => query_failed(key, provider_message(other)),
        })?;

        // Providers are asked to sort; the order is enforced here as well.
        query.sort.apply(&mut provider_samples);

        let samples = provider_samples
            .iter()
            .map(|s| normalize(s, query.sample_type, unit).map_err(|m| query_failed(key, m)))
            .collect::<Result<Vec<_>>>()?;

        debug!("Read {} samples of {} ({})", samples.len(), key, query.sample_type);
        Ok(samples)
    }
}

fn query_failed(key: &str, message: String) -> HealthError {
    warn!("Query for {} failed: {}", key, message);
    HealthError::QueryFailed {
        data_type: key.to_string(),
        message,
    }
}

fn provider_message(error: HealthError) -> String {
    match error {
        HealthError::Provider { message, .. } => message,
        other => other.to_string(),
    }
}

/// Maps one provider sample onto the wire shape, checking that it matches the
/// queried type kind.
fn normalize(
    sample: &ProviderSample,
    expected: SampleType,
    unit: MeasurementUnit,
) -> std::result::Result<Sample, String> {
    let value = match (expected, sample.value) {
        (SampleType::Quantity(_), SampleValue::Quantity(quantity)) => {
            quantity.value_in(unit).map_err(|e| e.to_string())?
        }
        (SampleType::Category(_), SampleValue::Category(raw)) => raw as f64,
        _ => {
            return Err(format!(
                "sample {} is not a {} sample",
                sample.identity(),
                if expected.is_quantity() {
                    "quantity"
                } else {
                    "category"
                }
            ))
        }
    };

    Ok(Sample {
        uuid: sample.identity(),
        value,
        date_from: sample.start.timestamp_millis(),
        date_to: sample.end.timestamp_millis(),
    })
}
