use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::HealthError;

/// A pair of absolute timestamps in milliseconds since the Unix epoch.
///
/// `end >= start` is expected but not enforced; inverted ranges are handed to
/// the provider as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeRange {
    pub start_ms: i64,
    pub end_ms: i64,
}

impl TimeRange {
    pub fn new(start_ms: i64, end_ms: i64) -> Self {
        Self { start_ms, end_ms }
    }

    pub fn is_inverted(&self) -> bool {
        self.end_ms < self.start_ms
    }

    /// Converts both bounds into provider timestamps.
    pub fn to_datetimes(&self) -> Result<(DateTime<Utc>, DateTime<Utc>), HealthError> {
        Ok((
            millis_to_datetime("startDate", self.start_ms)?,
            millis_to_datetime("endDate", self.end_ms)?,
        ))
    }
}

fn millis_to_datetime(field: &str, millis: i64) -> Result<DateTime<Utc>, HealthError> {
    DateTime::from_timestamp_millis(millis).ok_or_else(|| {
        HealthError::invalid_argument(field, format!("timestamp {} ms is out of range", millis))
    })
}
