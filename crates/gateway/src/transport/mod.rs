//! Transport abstraction layer
//!
//! Provides unified traits for queue access using tokio channels.
//! The trait-based design allows swapping in a broker-backed transport later.

pub mod channel;
pub mod delivery;

use crate::error::TransportError;
use async_trait::async_trait;
use self::delivery::Delivery;

/// Publisher - enqueues raw payloads
#[async_trait]
pub trait QueuePublisher: Send + Sync {
    /// Enqueue a payload for delivery
    async fn publish(&self, payload: Vec<u8>) -> Result<(), TransportError>;
}

/// Consumer - receives deliveries from the queue
///
/// Each delivery must be acknowledged once fully handled; a delivery that
/// goes out of scope unacknowledged is requeued (at-least-once semantics).
#[async_trait]
pub trait QueueConsumer: Send {
    /// Wait for the next delivery
    async fn next(&mut self) -> Result<Delivery, TransportError>;

    /// Try to receive without blocking (returns None if the queue is empty)
    fn try_next(&mut self) -> Result<Option<Delivery>, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Ensure traits are object-safe
    fn _assert_publisher_object_safe(_: &dyn QueuePublisher) {}
    fn _assert_consumer_object_safe(_: &mut dyn QueueConsumer) {}
}
