use thiserror::Error;

/// Failures of the pipeline itself, as opposed to rejected payloads
#[derive(Debug, Error, Clone)]
pub enum ObserverError {
    #[error("Timeout error: {0}")]
    TimeoutError(String),
}
