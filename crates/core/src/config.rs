//! Bridge configuration.

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::HealthError;

/// What the registry does when a key is missing from a lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyPolicy {
    /// Substitute the fallback type (body mass) and unit (count), log and count the miss.
    #[default]
    Fallback,
    /// Reject the key with [`HealthError::UnresolvedKey`].
    Strict,
}

impl FromStr for KeyPolicy {
    type Err = HealthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fallback" => Ok(Self::Fallback),
            "strict" => Ok(Self::Strict),
            other => Err(HealthError::invalid_argument(
                "key_policy",
                format!("expected 'fallback' or 'strict', got '{}'", other),
            )),
        }
    }
}

/// Runtime options for a [`HealthDispatcher`](crate::dispatcher::HealthDispatcher).
#[derive(Debug, Clone, Default)]
pub struct BridgeConfig {
    pub key_policy: KeyPolicy,

    /// Upper bound on a single provider operation. `None` waits indefinitely.
    pub operation_timeout: Option<Duration>,
}

impl BridgeConfig {
    pub fn strict() -> Self {
        Self {
            key_policy: KeyPolicy::Strict,
            ..Self::default()
        }
    }

    pub fn with_operation_timeout(mut self, timeout: Duration) -> Self {
        self.operation_timeout = Some(timeout);
        self
    }
}
