use std::sync::{Arc, OnceLock};

use log::{debug, info, warn};
use serde_json::Value;

use super::method::HealthMethod;
use crate::config::BridgeConfig;
use crate::errors::{HealthError, Result};
use crate::models::{HealthDataType, Sample, TimeRange};
use crate::provider::HealthProvider;
use crate::registry::TypeRegistry;
use crate::service::{AuthorizationBroker, AvailabilityGate, PersistTranslator, QueryTranslator};

/// Routes inbound calls to the availability gate, authorization broker, read
/// path and write path.
///
/// The type registry is built on first use from the provider's capabilities
/// and shared by every later call.
pub struct HealthDispatcher {
    provider: Arc<dyn HealthProvider>,
    config: BridgeConfig,
    registry: OnceLock<Arc<TypeRegistry>>,
}

impl HealthDispatcher {
    pub fn new(provider: Arc<dyn HealthProvider>, config: BridgeConfig) -> Self {
        Self {
            provider,
            config,
            registry: OnceLock::new(),
        }
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// The registry for this dispatcher, built exactly once.
    pub fn registry(&self) -> Arc<TypeRegistry> {
        self.registry
            .get_or_init(|| {
                let capabilities = self.provider.capabilities();
                info!(
                    "Initializing type registry for provider '{}' with tiers {:?}",
                    self.provider.id(),
                    capabilities.tiers
                );
                Arc::new(TypeRegistry::build(&capabilities, self.config.key_policy))
            })
            .clone()
    }

    /// Handles a raw call: method name plus JSON argument bag.
    pub async fn handle(&self, method: &str, args: &Value) -> Result<Value> {
        let parsed = HealthMethod::parse(method, args).map_err(|e| {
            warn!("Rejected call '{}': {}", method, e);
            e
        })?;
        self.call(parsed).await
    }

    /// Executes a parsed call and encodes its wire result.
    pub async fn call(&self, method: HealthMethod) -> Result<Value> {
        debug!("Dispatching {}", method.name());
        match method {
            HealthMethod::CheckAvailability => Ok(Value::Bool(self.check_availability())),
            HealthMethod::RequestAuthorization { types, write_types } => self
                .request_authorization(&types, &write_types)
                .await
                .map(Value::Bool),
            HealthMethod::GetData {
                data_type_key,
                range,
            } => {
                let samples = self.get_data(&data_type_key, range).await?;
                encode(&samples)
            }
            HealthMethod::WriteData {
                data_type_key,
                range,
                value,
            } => match self.write_data(&data_type_key, range, value).await {
                Ok(()) => Ok(Value::Bool(true)),
                // The channel reports write failures as `false`.
                Err(HealthError::PersistFailed { .. }) => Ok(Value::Bool(false)),
                Err(e) => Err(e),
            },
            HealthMethod::GetSupportedTypes => encode(&self.supported_types()),
        }
    }

    pub fn check_availability(&self) -> bool {
        AvailabilityGate::new(self.provider.clone()).is_available()
    }

    pub async fn request_authorization<S: AsRef<str>>(
        &self,
        read_keys: &[S],
        write_keys: &[S],
    ) -> Result<bool> {
        AuthorizationBroker::new(
            self.registry(),
            self.provider.clone(),
            self.config.operation_timeout,
        )
        .request(read_keys, write_keys)
        .await
    }

    pub async fn get_data(&self, key: &str, range: TimeRange) -> Result<Vec<Sample>> {
        QueryTranslator::new(
            self.registry(),
            self.provider.clone(),
            self.config.operation_timeout,
        )
        .query(key, range)
        .await
    }

    pub async fn write_data(&self, key: &str, range: TimeRange, value: f64) -> Result<()> {
        PersistTranslator::new(
            self.registry(),
            self.provider.clone(),
            self.config.operation_timeout,
        )
        .write(key, range, value)
        .await
    }

    /// Keys registered for the provider's capabilities.
    pub fn supported_types(&self) -> Vec<HealthDataType> {
        self.registry().registered_keys()
    }
}

fn encode<T: serde::Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value)
        .map_err(|e| HealthError::provider("dispatcher", format!("failed to encode result: {}", e)))
}
