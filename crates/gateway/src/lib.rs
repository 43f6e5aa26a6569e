//! Quotesink Gateway
//!
//! Queue transport layer for the quotesink pipeline. Provides:
//! - Transport abstraction (tokio channels, with traits for other transports)
//! - At-least-once delivery envelope with explicit acknowledgement
//!
//! ## Architecture
//!
//! ```text
//! Publisher (upstream / test harness)
//!         │
//!    ┌────▼─────┐
//!    │  Queue   │  at-least-once: a delivery dropped without ack
//!    │ Transport│  goes back on the queue for redelivery
//!    └────┬─────┘
//!         │
//!    ┌────▼─────┐
//!    │ Pipeline │
//!    │ Consumer │
//!    └──────────┘
//! ```
//!
//! ## Transport
//!
//! Currently uses tokio channels for single-process operation. The
//! `QueuePublisher`/`QueueConsumer` traits allow plugging in a broker-backed
//! transport (Azure Storage Queues, NATS, etc.) when needed.

pub mod error;
pub mod transport;

// Re-export commonly used types
pub use error::TransportError;
pub use transport::{
    QueueConsumer, QueuePublisher,
    channel::{ChannelConsumer, ChannelPublisher, ChannelQueue},
    delivery::Delivery,
};
