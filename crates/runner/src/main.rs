//! Quotesink consumer process
//!
//! Wires the in-process queue transport, the in-memory store adapter, and
//! the system clock into a running consumer. A deployment against a real
//! broker/store swaps the two adapters; the pipeline is unchanged.

use std::sync::Arc;

use log::info;
use quotesink_clock::SystemClock;
use quotesink_docstore::MemoryQuoteStore;
use quotesink_gateway::ChannelQueue;
use quotesink_pipeline::QuoteProcessor;
use quotesink_runner::{ConsumerConfig, QuoteConsumer, shutdown_channel};

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = ConsumerConfig::from_env();
    info!("Starting quotesink consumer: {config:?}");

    // The publisher end belongs to the upstream producer; it is held here
    // only so the in-process queue stays open.
    let (_publisher, queue_consumer) = ChannelQueue::pair();

    let store = Arc::new(MemoryQuoteStore::new());
    let clock = Arc::new(SystemClock::new());
    let processor = Arc::new(QuoteProcessor::new(store, clock));

    let (shutdown_tx, shutdown_rx) = shutdown_channel();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_tx.send(true);
        }
    });

    QuoteConsumer::new(config, queue_consumer, processor, shutdown_rx)
        .run()
        .await;
}
