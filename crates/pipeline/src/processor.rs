//! Quote Processor - the per-delivery orchestrator
//!
//! Invoked once per inbound queue delivery. Sequences
//! decode -> validate -> enrich -> persist and owns the failure policy:
//! - malformed payload: terminal, never retried (poison message)
//! - business-rule rejection: terminal, message dropped, no document written
//! - persistence failure: propagated so the delivery stays unacked and
//!   becomes eligible for redelivery

use std::sync::Arc;

use log::{error, info};
use quotesink_core::QuoteMessage;
use quotesink_ports::{Clock, QuoteStore};

use crate::enrich::enrich;
use crate::error::{ProcessorError, Result};
use crate::validator::{QuoteValidator, ValidationReport};

/// Terminal outcome of one successfully handled delivery
///
/// Both variants mean the delivery is done and must be acknowledged;
/// retryable failures come back as `Err(ProcessorError::Persist)` instead.
#[derive(Debug)]
pub enum Outcome {
    /// Message validated and written to the document store
    Persisted,
    /// Message failed business rules; dropped without persisting
    Rejected(ValidationReport),
}

/// Per-delivery pipeline orchestrator
///
/// Collaborators are constructor-injected; the processor holds no global
/// state and is safe to share across concurrent worker invocations.
pub struct QuoteProcessor {
    store: Arc<dyn QuoteStore>,
    clock: Arc<dyn Clock>,
}

impl QuoteProcessor {
    pub fn new(store: Arc<dyn QuoteStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Process one raw queue payload.
    ///
    /// `Err(ProcessorError::Decode)` is terminal: the caller should still
    /// acknowledge so the poison message is not redelivered as-is.
    /// `Err(ProcessorError::Persist)` is retryable: the caller must leave
    /// the delivery unacknowledged.
    pub async fn process(&self, raw: &[u8]) -> Result<Outcome> {
        let msg: QuoteMessage = serde_json::from_slice(raw).map_err(|err| {
            error!("Malformed quote payload, dropping as poison: {err}");
            ProcessorError::Decode(err)
        })?;
        info!("Quote received: {msg:?}");

        let report = QuoteValidator::validate(&msg);
        if !report.is_valid() {
            error!("Invalid quote data for asset '{}'", msg.codigo);
            for violation in report.violations() {
                error!(" ## {}", violation.message);
            }
            return Ok(Outcome::Rejected(report));
        }

        let doc = enrich(&msg, self.clock.now());
        self.store.save(&doc).await.map_err(|err| {
            error!("Persisting quote for '{}' failed: {err}", doc.codigo);
            ProcessorError::Persist(err)
        })?;

        info!("Quote for '{}' registered successfully", doc.codigo);
        Ok(Outcome::Persisted)
    }
}
