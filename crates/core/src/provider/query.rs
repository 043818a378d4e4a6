//! Provider query description.

use chrono::{DateTime, Utc};

use crate::models::{ProviderSample, SampleType};

/// Time window predicate handed to the provider: a sample matches when its
/// start falls in `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SamplePredicate {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl SamplePredicate {
    pub fn strict_start(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Evaluates the predicate against one stored sample.
    pub fn matches(&self, sample: &ProviderSample) -> bool {
        sample.start >= self.start && sample.start < self.end
    }
}

/// Ordering of query results by sample end date.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortDescriptor {
    pub ascending: bool,
}

impl SortDescriptor {
    pub fn end_date_ascending() -> Self {
        Self { ascending: true }
    }

    /// Sorts samples in place. The sort is stable so ties keep provider order.
    pub fn apply(&self, samples: &mut [ProviderSample]) {
        samples.sort_by(|a, b| {
            let ordering = a.end.cmp(&b.end);
            if self.ascending {
                ordering
            } else {
                ordering.reverse()
            }
        });
    }
}

/// A complete sample query: what to select, how to order it, how many to return.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SampleQuery {
    pub sample_type: SampleType,
    pub predicate: SamplePredicate,
    pub sort: SortDescriptor,
    /// Maximum number of results. `None` means no limit.
    pub limit: Option<usize>,
}
