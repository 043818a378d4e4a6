//! Health provider abstractions.
//!
//! This module contains:
//! - The `HealthProvider` trait every backing store implements
//! - Provider capability tiers, queried at runtime
//! - The query description handed to the provider (predicate, sort, limit)
//! - An in-memory provider implementation
//!
//! The bridge never talks to a platform directly. Requests are translated into
//! `SampleQuery` / `QuantitySample` values and passed through the trait.

mod capabilities;
mod memory;
mod query;
mod traits;

pub use capabilities::ProviderCapabilities;
pub use memory::{AuthorizationMode, AuthorizationRecord, InMemoryHealthStore};
pub use query::{SamplePredicate, SampleQuery, SortDescriptor};
pub use traits::HealthProvider;
