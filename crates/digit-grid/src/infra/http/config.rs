//! Digit endpoint configuration.

use std::env;
use std::time::Duration;

use thiserror::Error;
use tracing::warn;
use url::Url;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_PATH: &str = "/digit";
const DEFAULT_TIMEOUT_MS: u64 = 10_000;

pub const HOST_ENV: &str = "DIGIT_GRID_HOST";
pub const PORT_ENV: &str = "DIGIT_GRID_PORT";
pub const PATH_ENV: &str = "DIGIT_GRID_PATH";
pub const TIMEOUT_ENV: &str = "DIGIT_GRID_TIMEOUT_MS";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid digit endpoint '{endpoint}': {reason}")]
pub struct ConfigError {
    pub endpoint: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    host: String,
    port: u16,
    path: String,
    timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            path: DEFAULT_PATH.to_string(),
            timeout: timeout_from_ms(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env_string(HOST_ENV).unwrap_or(defaults.host),
            port: parse_env_u16(PORT_ENV, DEFAULT_PORT),
            path: env_string(PATH_ENV).unwrap_or(defaults.path),
            timeout: timeout_from_ms(parse_env_u64(TIMEOUT_ENV, DEFAULT_TIMEOUT_MS)),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// `None` waits for the server indefinitely.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// A zero timeout disables it.
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout = timeout_from_ms(timeout_ms);
        self
    }

    pub fn endpoint_url(&self) -> Result<Url, ConfigError> {
        let base = format!("http://{}:{}", self.host, self.port);
        let invalid = |reason: String| ConfigError {
            endpoint: format!("{base}{}", self.path),
            reason,
        };
        let base_url = Url::parse(&base).map_err(|err| invalid(err.to_string()))?;
        if base_url.host_str().is_none_or(str::is_empty) {
            return Err(invalid("missing host".to_string()));
        }
        base_url
            .join(&self.path)
            .map_err(|err| invalid(err.to_string()))
    }
}

fn timeout_from_ms(timeout_ms: u64) -> Option<Duration> {
    (timeout_ms > 0).then(|| Duration::from_millis(timeout_ms))
}

fn env_string(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_env_u16(key: &str, default: u16) -> u16 {
    let Some(value) = env_string(key) else {
        return default;
    };
    match value.parse::<u16>() {
        Ok(parsed) => parsed,
        Err(_) => {
            warn!(value = %value, key, "Invalid port; using default");
            default
        }
    }
}

fn parse_env_u64(key: &str, default: u64) -> u64 {
    let Some(value) = env_string(key) else {
        return default;
    };
    match value.parse::<u64>() {
        Ok(parsed) => parsed,
        Err(_) => {
            warn!(value = %value, key, "Invalid numeric config; using default");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::test_env::EnvGuard;

    #[test]
    fn test_default_endpoint() {
        let url = ClientConfig::default().endpoint_url().unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/digit");
    }

    #[test]
    fn test_default_timeout() {
        assert_eq!(
            ClientConfig::default().timeout(),
            Some(Duration::from_secs(10))
        );
    }

    #[test]
    fn test_builders_override_defaults() {
        let config = ClientConfig::default()
            .with_host("127.0.0.1")
            .with_port(9000)
            .with_path("/api/digit")
            .with_timeout_ms(0);
        assert_eq!(
            config.endpoint_url().unwrap().as_str(),
            "http://127.0.0.1:9000/api/digit"
        );
        assert_eq!(config.timeout(), None);
    }

    #[test]
    fn test_relative_path_is_joined_to_root() {
        let config = ClientConfig::default().with_path("digit");
        assert_eq!(
            config.endpoint_url().unwrap().as_str(),
            "http://localhost:8080/digit"
        );
    }

    #[test]
    fn test_invalid_host_is_rejected() {
        let err = ClientConfig::default()
            .with_host("bad host")
            .endpoint_url()
            .unwrap_err();
        assert!(err.endpoint.contains("bad host"));
    }

    #[test]
    fn test_host_and_path_from_env() {
        let _host = EnvGuard::set(HOST_ENV, " digits.local ");
        let _path = EnvGuard::set(PATH_ENV, "/v2/digit");
        let config = ClientConfig::from_env();
        assert_eq!(config.host(), "digits.local");
        assert_eq!(config.path(), "/v2/digit");
    }

    #[test]
    fn test_invalid_port_env_falls_back() {
        let _port = EnvGuard::set(PORT_ENV, "eighty");
        assert_eq!(ClientConfig::from_env().port(), DEFAULT_PORT);
    }

    #[test]
    fn test_timeout_env_zero_disables() {
        let _timeout = EnvGuard::set(TIMEOUT_ENV, "0");
        assert_eq!(ClientConfig::from_env().timeout(), None);
    }
}
