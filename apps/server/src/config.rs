use std::{net::SocketAddr, str::FromStr, time::Duration};

use anyhow::{anyhow, Context};
use healthbridge_core::{AuthorizationMode, KeyPolicy};

/// Log output format for the process-wide subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(anyhow!("unknown log format '{}'", other)),
        }
    }
}

pub struct Config {
    pub listen_addr: SocketAddr,
    pub request_timeout: Duration,
    pub key_policy: KeyPolicy,
    pub operation_timeout: Option<Duration>,
    pub provider_available: bool,
    pub provider_heart_events: bool,
    pub provider_authorization: AuthorizationMode,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr: SocketAddr = lookup("HB_LISTEN_ADDR")
            .unwrap_or_else(|| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid HB_LISTEN_ADDR")?;
        let timeout_ms: u64 = lookup("HB_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|| "30000".into())
            .parse()
            .unwrap_or(30000);
        let key_policy = match lookup("HB_KEY_POLICY") {
            Some(raw) => raw
                .parse::<KeyPolicy>()
                .map_err(|e| anyhow!("Invalid HB_KEY_POLICY: {}", e))?,
            None => KeyPolicy::default(),
        };
        // Zero or absent means provider calls are not bounded.
        let operation_timeout = lookup("HB_OPERATION_TIMEOUT_MS")
            .map(|raw| raw.trim().parse::<u64>())
            .transpose()
            .context("Invalid HB_OPERATION_TIMEOUT_MS")?
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis);
        let provider_available = flag(&lookup, "HB_PROVIDER_AVAILABLE", true)?;
        let provider_heart_events = flag(&lookup, "HB_PROVIDER_HEART_EVENTS", true)?;
        let provider_authorization = match lookup("HB_PROVIDER_AUTHORIZATION") {
            Some(raw) => authorization_mode(&raw)?,
            None => AuthorizationMode::default(),
        };
        let log_format = match lookup("HB_LOG_FORMAT") {
            Some(raw) => raw.parse()?,
            None => LogFormat::default(),
        };

        Ok(Self {
            listen_addr,
            request_timeout: Duration::from_millis(timeout_ms),
            key_policy,
            operation_timeout,
            provider_available,
            provider_heart_events,
            provider_authorization,
            log_format,
        })
    }
}

fn flag<F>(lookup: &F, name: &str, default: bool) -> anyhow::Result<bool>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            other => Err(anyhow!("Invalid {}: '{}'", name, other)),
        },
    }
}

fn authorization_mode(raw: &str) -> anyhow::Result<AuthorizationMode> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "grant" => Ok(AuthorizationMode::Grant),
        "deny" => Ok(AuthorizationMode::Deny),
        "unsupported" => Ok(AuthorizationMode::Unsupported),
        other => Err(anyhow!("Invalid HB_PROVIDER_AUTHORIZATION: '{}'", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.listen_addr.port(), 8080);
        assert_eq!(config.request_timeout, Duration::from_millis(30000));
        assert_eq!(config.key_policy, KeyPolicy::Fallback);
        assert!(config.operation_timeout.is_none());
        assert!(config.provider_available);
        assert!(config.provider_heart_events);
        assert_eq!(config.provider_authorization, AuthorizationMode::Grant);
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("HB_LISTEN_ADDR", "127.0.0.1:9000"),
            ("HB_KEY_POLICY", "strict"),
            ("HB_OPERATION_TIMEOUT_MS", "1500"),
            ("HB_PROVIDER_AVAILABLE", "false"),
            ("HB_PROVIDER_HEART_EVENTS", "0"),
            ("HB_PROVIDER_AUTHORIZATION", "Deny"),
            ("HB_LOG_FORMAT", "json"),
        ])
        .unwrap();
        assert_eq!(config.listen_addr.port(), 9000);
        assert_eq!(config.key_policy, KeyPolicy::Strict);
        assert_eq!(config.operation_timeout, Some(Duration::from_millis(1500)));
        assert!(!config.provider_available);
        assert!(!config.provider_heart_events);
        assert_eq!(config.provider_authorization, AuthorizationMode::Deny);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_zero_operation_timeout_means_unbounded() {
        let config = config(&[("HB_OPERATION_TIMEOUT_MS", "0")]).unwrap();
        assert!(config.operation_timeout.is_none());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(config(&[("HB_KEY_POLICY", "lenient")]).is_err());
        assert!(config(&[("HB_PROVIDER_AVAILABLE", "maybe")]).is_err());
        assert!(config(&[("HB_LISTEN_ADDR", "not-an-addr")]).is_err());
        assert!(config(&[("HB_LOG_FORMAT", "xml")]).is_err());
    }
}
