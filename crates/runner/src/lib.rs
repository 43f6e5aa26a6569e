//! Quotesink Runner - Consumer wiring
//!
//! Connects the queue transport to the processing pipeline:
//!
//! - **Config**: queue/store names and dispatch limits
//! - **Consumer**: the dispatch loop invoking the processor once per delivery
//!
//! ## Architecture
//!
//! ```text
//!  Publisher (upstream)
//!        │
//!        ▼
//!  ┌───────────┐   deliveries   ┌───────────────┐
//!  │   Queue   ├───────────────►│ QuoteConsumer │
//!  │ Transport │◄───────────────┤  (dispatch)   │
//!  └───────────┘  requeue on    └───────┬───────┘
//!                 missing ack           │ one worker per delivery
//!                                       ▼
//!                               ┌───────────────┐
//!                               │QuoteProcessor │
//!                               │ validate →    │
//!                               │ enrich → save │
//!                               └───────┬───────┘
//!                                       ▼
//!                               ┌───────────────┐
//!                               │  Quote Store  │
//!                               └───────────────┘
//! ```

pub mod config;
pub mod consumer;

// Re-export main types
pub use config::ConsumerConfig;
pub use consumer::{QuoteConsumer, shutdown_channel};
