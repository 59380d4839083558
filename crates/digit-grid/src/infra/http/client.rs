//! Blocking HTTP client behind the async `DigitSource` port.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;
use ureq::Agent;
use url::Url;

use crate::infra::http::config::{ClientConfig, ConfigError};
use crate::usecases::ports::{DigitSource, TransportError};

pub struct HttpDigitSource {
    agent: Agent,
    url: Url,
    endpoint: String,
    timeout: Option<Duration>,
}

impl HttpDigitSource {
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let url = config.endpoint_url()?;
        let agent: Agent = Agent::config_builder()
            .timeout_global(config.timeout())
            .http_status_as_error(true)
            .build()
            .into();
        Ok(Self {
            agent,
            endpoint: url.to_string(),
            url,
            timeout: config.timeout(),
        })
    }

    fn classify(error: ureq::Error, endpoint: &str, timeout: Option<Duration>) -> TransportError {
        match error {
            ureq::Error::StatusCode(status) => TransportError::Status {
                endpoint: endpoint.to_string(),
                status,
            },
            ureq::Error::Timeout(_) => TransportError::Timeout {
                endpoint: endpoint.to_string(),
                timeout_ms: timeout.map_or(0, |t| t.as_millis() as u64),
            },
            other => TransportError::Network {
                endpoint: endpoint.to_string(),
                reason: other.to_string(),
            },
        }
    }
}

#[async_trait]
impl DigitSource for HttpDigitSource {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn fetch(&self) -> Result<String, TransportError> {
        let agent = self.agent.clone();
        let url = self.url.clone();
        let endpoint = self.endpoint.clone();
        let timeout = self.timeout;

        debug!(endpoint = %endpoint, "GET digit");
        tokio::task::spawn_blocking(move || {
            let mut response = agent
                .get(url.as_str())
                .call()
                .map_err(|err| Self::classify(err, &endpoint, timeout))?;
            let status = response.status().as_u16();
            let body = response
                .body_mut()
                .read_to_string()
                .map_err(|err| Self::classify(err, &endpoint, timeout))?;
            debug!(endpoint = %endpoint, status, bytes = body.len(), "Digit response received");
            Ok(body)
        })
        .await
        .map_err(|err| TransportError::Task(err.to_string()))?
    }
}
