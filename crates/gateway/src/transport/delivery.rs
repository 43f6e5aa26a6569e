//! Delivery envelope with at-least-once acknowledgement semantics

use log::warn;
use tokio::sync::mpsc;
use uuid::Uuid;

/// Message as held on the queue (payload plus redelivery bookkeeping)
#[derive(Debug)]
pub(crate) struct QueuedMessage {
    pub(crate) id: Uuid,
    pub(crate) attempt: u32,
    pub(crate) payload: Vec<u8>,
}

/// A single queue delivery handed to the pipeline.
///
/// Call `ack` once the message is fully handled (persisted, rejected, or
/// poison). A `Delivery` dropped without ack - worker abandoned, dispatcher
/// timeout, persistence failure - is requeued with an incremented attempt
/// counter, so redelivery is the default and acknowledgement is explicit.
#[derive(Debug)]
pub struct Delivery {
    id: Uuid,
    attempt: u32,
    payload: Vec<u8>,
    requeue_tx: mpsc::UnboundedSender<QueuedMessage>,
    acked: bool,
}

impl Delivery {
    pub(crate) fn new(
        msg: QueuedMessage,
        requeue_tx: mpsc::UnboundedSender<QueuedMessage>,
    ) -> Self {
        Self {
            id: msg.id,
            attempt: msg.attempt,
            payload: msg.payload,
            requeue_tx,
            acked: false,
        }
    }

    /// Stable identifier assigned when the message was first published
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Delivery attempt, starting at 1 for the first delivery
    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    /// Raw payload bytes as published
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Acknowledge the delivery; it will not be redelivered.
    pub fn ack(mut self) {
        self.acked = true;
    }
}

impl Drop for Delivery {
    fn drop(&mut self) {
        if self.acked {
            return;
        }
        let msg = QueuedMessage {
            id: self.id,
            attempt: self.attempt + 1,
            payload: std::mem::take(&mut self.payload),
        };
        if self.requeue_tx.send(msg).is_err() {
            warn!(
                "Queue closed, dropping unacked delivery {} (attempt {})",
                self.id, self.attempt
            );
        }
    }
}
