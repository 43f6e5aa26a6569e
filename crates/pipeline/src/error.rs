//! Pipeline errors
//!
//! Business-rule violations are deliberately NOT errors - they are data
//! (see `validator::ValidationReport`). Only failures that change the
//! delivery's fate live here.

use quotesink_ports::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessorError {
    /// Payload could not be interpreted as a quotation message.
    /// Non-retryable: the same bytes would fail identically (poison message).
    #[error("Malformed quote payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// Document store rejected or failed the write.
    /// Retryable: the caller must leave the delivery unacked so it redelivers.
    #[error("Quote persistence failed: {0}")]
    Persist(#[from] StoreError),
}

impl ProcessorError {
    /// Whether redelivery can change the outcome
    pub fn is_retryable(&self) -> bool {
        matches!(self, ProcessorError::Persist(_))
    }
}

pub type Result<T> = std::result::Result<T, ProcessorError>;
