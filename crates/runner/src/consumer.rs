//! Quote Consumer - the dispatch loop
//!
//! Owns the consuming end of the queue and invokes the processor once per
//! delivery. Distinct deliveries may process concurrently (bounded by
//! `max_in_flight`); each invocation is internally sequential.
//!
//! Acknowledgement policy:
//! - persisted or rejected: ack (terminal)
//! - malformed payload: ack, so the poison message is not redelivered as-is
//! - persistence failure: drop without ack, the transport requeues it
//!
//! A worker that is cancelled or panics also never acks, so its delivery
//! stays eligible for redelivery.

use std::sync::Arc;

use log::{error, info, warn};
use quotesink_gateway::{Delivery, QueueConsumer, TransportError};
use quotesink_pipeline::{Outcome, QuoteProcessor};
use tokio::sync::{Semaphore, watch};

use crate::config::ConsumerConfig;

/// Dispatches queue deliveries to the processing pipeline
pub struct QuoteConsumer<C: QueueConsumer> {
    config: ConsumerConfig,
    consumer: C,
    processor: Arc<QuoteProcessor>,
    shutdown_rx: watch::Receiver<bool>,
}

impl<C: QueueConsumer> QuoteConsumer<C> {
    pub fn new(
        config: ConsumerConfig,
        consumer: C,
        processor: Arc<QuoteProcessor>,
        shutdown_rx: watch::Receiver<bool>,
    ) -> Self {
        Self {
            config,
            consumer,
            processor,
            shutdown_rx,
        }
    }

    /// Run until shutdown is signalled or the queue closes.
    ///
    /// In-flight workers finish before this returns; their unacked
    /// deliveries requeue through the transport.
    pub async fn run(mut self) {
        info!(
            "Quote consumer started (queue '{}', store '{}/{}')",
            self.config.queue_name, self.config.database, self.config.collection
        );

        let max_in_flight = self.config.max_in_flight.max(1);
        let limiter = Arc::new(Semaphore::new(max_in_flight));

        loop {
            tokio::select! {
                _ = self.shutdown_rx.changed() => {
                    info!("Shutdown signalled, draining in-flight workers");
                    break;
                }

                result = self.consumer.next() => {
                    match result {
                        Ok(delivery) => {
                            let Ok(permit) = limiter.clone().acquire_owned().await else {
                                break;
                            };
                            let processor = self.processor.clone();
                            tokio::spawn(async move {
                                handle_delivery(processor, delivery).await;
                                drop(permit);
                            });
                        }
                        Err(TransportError::ChannelClosed) => {
                            info!("Queue closed, stopping consumer");
                            break;
                        }
                        Err(err) => {
                            error!("Transport failure: {err}");
                            break;
                        }
                    }
                }
            }
        }

        // Wait for every worker to hand back its permit
        let _ = limiter.acquire_many(max_in_flight as u32).await;
        info!("Quote consumer stopped");
    }
}

/// Process one delivery and settle its acknowledgement
async fn handle_delivery(processor: Arc<QuoteProcessor>, delivery: Delivery) {
    let id = delivery.id();
    let attempt = delivery.attempt();

    match processor.process(delivery.payload()).await {
        Ok(Outcome::Persisted) => delivery.ack(),
        Ok(Outcome::Rejected(_)) => {
            // Rejections are terminal: revalidating unchanged input would
            // fail identically, so the message is dropped, not retried.
            delivery.ack();
        }
        Err(err) if err.is_retryable() => {
            warn!("Delivery {id} attempt {attempt} failed, leaving unacked for redelivery: {err}");
            drop(delivery);
        }
        Err(err) => {
            error!("Delivery {id} is poison, acknowledging without processing: {err}");
            delivery.ack();
        }
    }
}

/// Create a shutdown signal pair for `QuoteConsumer::run`
pub fn shutdown_channel() -> (watch::Sender<bool>, watch::Receiver<bool>) {
    watch::channel(false)
}
