use thiserror::Error;

/// Document-store errors
///
/// Every variant is retryable from the pipeline's point of view: the
/// orchestrator propagates the failure so the delivery is redelivered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Store connection failed: {0}")]
    Connection(String),

    #[error("Write rejected by store: {0}")]
    WriteRejected(String),

    #[error("Query failed: {0}")]
    Query(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
