//! Tokio channel-based queue transport for single-process mode
//!
//! Uses an unbounded mpsc channel as the queue. Redelivery of unacked
//! messages re-enters through a clone of the producer side, so the channel
//! stays open for as long as the consumer lives.

use crate::error::TransportError;
use crate::transport::delivery::{Delivery, QueuedMessage};
use crate::transport::{QueueConsumer, QueuePublisher};
use async_trait::async_trait;
use tokio::sync::mpsc;
use uuid::Uuid;

/// Factory for in-process queue endpoints
pub struct ChannelQueue;

impl ChannelQueue {
    /// Create a publisher/consumer pair sharing one queue
    pub fn pair() -> (ChannelPublisher, ChannelConsumer) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            ChannelPublisher { tx: tx.clone() },
            ChannelConsumer { rx, requeue_tx: tx },
        )
    }
}

/// Channel-based publisher (upstream side of the queue)
#[derive(Clone)]
pub struct ChannelPublisher {
    tx: mpsc::UnboundedSender<QueuedMessage>,
}

#[async_trait]
impl QueuePublisher for ChannelPublisher {
    async fn publish(&self, payload: Vec<u8>) -> Result<(), TransportError> {
        let msg = QueuedMessage {
            id: Uuid::new_v4(),
            attempt: 1,
            payload,
        };
        self.tx.send(msg).map_err(|_| TransportError::ChannelClosed)
    }
}

/// Channel-based consumer (pipeline side of the queue)
pub struct ChannelConsumer {
    rx: mpsc::UnboundedReceiver<QueuedMessage>,
    // Also keeps the channel alive: unacked deliveries requeue through it
    requeue_tx: mpsc::UnboundedSender<QueuedMessage>,
}

#[async_trait]
impl QueueConsumer for ChannelConsumer {
    async fn next(&mut self) -> Result<Delivery, TransportError> {
        match self.rx.recv().await {
            Some(msg) => Ok(Delivery::new(msg, self.requeue_tx.clone())),
            None => Err(TransportError::ChannelClosed),
        }
    }

    fn try_next(&mut self) -> Result<Option<Delivery>, TransportError> {
        match self.rx.try_recv() {
            Ok(msg) => Ok(Some(Delivery::new(msg, self.requeue_tx.clone()))),
            Err(mpsc::error::TryRecvError::Empty) => Ok(None),
            Err(mpsc::error::TryRecvError::Disconnected) => Err(TransportError::ChannelClosed),
        }
    }
}
