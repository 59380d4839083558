use async_trait::async_trait;

use crate::usecases::ports::errors::TransportError;

/// One-shot supplier of `/digit` response bodies.
#[async_trait]
pub trait DigitSource: Send + Sync {
    /// Human-readable location, used in logs and error messages.
    fn endpoint(&self) -> &str;

    /// Issues a single request and returns the raw body.
    async fn fetch(&self) -> Result<String, TransportError>;
}
