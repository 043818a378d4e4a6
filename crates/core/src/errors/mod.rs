//! Error types for the health bridge.
//!
//! [`HealthError`] covers every failure the translation layer can surface.
//! Each variant maps to a stable wire code via [`HealthError::code`], which the
//! channel transport sends back to callers alongside the message.

use thiserror::Error;

/// Errors that can occur while translating and executing health requests.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HealthError {
    /// A type key is not present in the named lookup table.
    /// Only raised under the strict key policy; the fallback policy substitutes
    /// a default type or unit instead.
    #[error("Unresolved key '{key}' in {table}")]
    UnresolvedKey {
        /// The key that failed to resolve
        key: String,
        /// The lookup table that was consulted
        table: String,
    },

    /// The provider lacks the capability needed for the operation.
    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// The provider failed a read, or returned a result set of the wrong shape.
    #[error("Query failed for {data_type}: {message}")]
    QueryFailed {
        /// The requested type key
        data_type: String,
        /// Diagnostic text from the provider
        message: String,
    },

    /// The provider rejected or failed to store a sample.
    #[error("Persist failed for {data_type}: {message}")]
    PersistFailed {
        /// The requested type key
        data_type: String,
        /// Diagnostic text from the provider
        message: String,
    },

    /// A value cannot be expressed in the requested unit.
    #[error("Cannot convert from '{from}' to '{to}'")]
    IncompatibleUnits { from: String, to: String },

    /// An inbound argument is missing or has the wrong shape.
    #[error("Invalid argument '{name}': {message}")]
    InvalidArgument { name: String, message: String },

    /// The inbound method name is not part of the channel surface.
    #[error("Unsupported method: {0}")]
    UnsupportedMethod(String),

    /// The provider did not complete the operation within the configured timeout.
    #[error("Timeout after {timeout_ms} ms: {operation}")]
    Timeout { operation: String, timeout_ms: u64 },

    /// A provider-specific error, before translation into a read or write failure.
    #[error("Provider error: {provider} - {message}")]
    Provider { provider: String, message: String },
}

impl HealthError {
    pub fn unresolved(key: impl Into<String>, table: impl Into<String>) -> Self {
        Self::UnresolvedKey {
            key: key.into(),
            table: table.into(),
        }
    }

    pub fn invalid_argument(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Stable code sent over the channel with this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnresolvedKey { .. } => "UNRESOLVED_KEY",
            Self::ProviderUnavailable(_) => "PROVIDER_UNAVAILABLE",
            Self::QueryFailed { .. } => "QUERY_FAILED",
            Self::PersistFailed { .. } => "PERSIST_FAILED",
            Self::IncompatibleUnits { .. } => "INCOMPATIBLE_UNITS",
            Self::InvalidArgument { .. } => "INVALID_ARGUMENT",
            Self::UnsupportedMethod(_) => "UNSUPPORTED_METHOD",
            Self::Timeout { .. } => "TIMEOUT",
            Self::Provider { .. } => "PROVIDER_ERROR",
        }
    }

    /// Whether the caller sent something this layer refuses, as opposed to a provider failure.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::UnresolvedKey { .. } | Self::InvalidArgument { .. } | Self::UnsupportedMethod(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, HealthError>;
