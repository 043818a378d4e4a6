//! Type registry module.
//!
//! This module maps platform-independent data type keys onto the provider:
//! - Unit table (process-wide, built once)
//! - Sample type tables partitioned by capability tier
//! - `TypeRegistry`, built from the provider's capabilities, with the
//!   fallback/strict key policy applied on lookup misses

mod registry;
mod types;
mod units;

pub use registry::TypeRegistry;
pub use types::FALLBACK_QUANTITY_TYPE;
pub use units::{unit_for, FALLBACK_UNIT};
