use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("request to {endpoint} failed: {reason}")]
    Network { endpoint: String, reason: String },
    #[error("{endpoint} answered with HTTP status {status}")]
    Status { endpoint: String, status: u16 },
    #[error("request to {endpoint} timed out after {timeout_ms}ms")]
    Timeout { endpoint: String, timeout_ms: u64 },
    #[error("request task failed: {0}")]
    Task(String),
}

impl TransportError {
    pub fn operation(&self) -> &'static str {
        match self {
            TransportError::Network { .. } => "connect",
            TransportError::Status { .. } => "status",
            TransportError::Timeout { .. } => "timeout",
            TransportError::Task(_) => "task",
        }
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            TransportError::Network { .. } | TransportError::Timeout { .. } => true,
            TransportError::Status { status, .. } => *status >= 500,
            TransportError::Task(_) => false,
        }
    }
}
