use std::sync::Arc;

use crate::config::{Config, LogFormat};
use healthbridge_core::{
    BridgeConfig, CapabilityTier, HealthDispatcher, InMemoryHealthStore, ProviderCapabilities,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub dispatcher: HealthDispatcher,
    pub store: Arc<InMemoryHealthStore>,
}

/// Installs the global subscriber. `log` records from the core crate are
/// forwarded into it.
pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .init(),
        LogFormat::Text => registry.with(fmt::layer()).init(),
    }
}

pub fn build_state(config: &Config) -> Arc<AppState> {
    let capabilities = if config.provider_heart_events {
        ProviderCapabilities::full()
    } else {
        ProviderCapabilities::base_only()
    };
    tracing::info!(
        "In-memory provider: available={}, heart rhythm events={}, authorization={:?}",
        config.provider_available,
        capabilities.supports(CapabilityTier::HeartRhythmEvents),
        config.provider_authorization
    );

    let store = Arc::new(
        InMemoryHealthStore::new()
            .with_availability(config.provider_available)
            .with_capabilities(capabilities)
            .with_authorization(config.provider_authorization),
    );

    let bridge_config = BridgeConfig {
        key_policy: config.key_policy,
        operation_timeout: config.operation_timeout,
    };
    tracing::info!(
        "Key policy {:?}, operation timeout {:?}",
        bridge_config.key_policy,
        bridge_config.operation_timeout
    );

    Arc::new(AppState {
        dispatcher: HealthDispatcher::new(store.clone(), bridge_config),
        store,
    })
}
