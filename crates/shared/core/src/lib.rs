//! Quotesink Core Domain
//!
//! Pure domain types for the quotesink ingestion pipeline.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod document;
pub mod message;
pub mod values;

// Re-export commonly used types at crate root
pub use document::{BrokerRef, QuoteDocument};
pub use message::QuoteMessage;
pub use values::{AssetCode, Price, Timestamp};
