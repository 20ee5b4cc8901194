use thiserror::Error;

/// Failure of an individual store operation (insert, find, update, delete).
///
/// Nothing in docbench retries or swallows these: a failing operation ends the run.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Backend error: {0}")]
    Backend(Box<dyn std::error::Error + Send + Sync + 'static>),
    #[error("Failed to decode document: {0}")]
    Decode(String),
    #[error("Injected failure: {0}")]
    Injected(String),
}

impl StoreError {
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self { StoreError::Backend(Box::new(err)) }
}

/// Raised while establishing the connection, before any workload runs.
#[derive(Error, Debug)]
pub enum ConnectionError {
    #[error("unreachable: {source}")]
    Unreachable {
        endpoint: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
    #[error("invalid endpoint: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
}

impl ConnectionError {
    pub fn unreachable(endpoint: impl Into<String>, err: impl std::error::Error + Send + Sync + 'static) -> Self {
        ConnectionError::Unreachable { endpoint: endpoint.into(), source: Box::new(err) }
    }

    /// The `host:port` the connection was attempted against.
    pub fn endpoint(&self) -> &str {
        match self {
            ConnectionError::Unreachable { endpoint, .. } | ConnectionError::InvalidEndpoint { endpoint, .. } => endpoint,
        }
    }
}
