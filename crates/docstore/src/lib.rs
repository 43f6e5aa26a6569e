//! Quotesink Document Store
//!
//! In-memory adapter for the `QuoteStore` port. Stands in for the deployed
//! document database in single-process runs and tests.
//!
//! Upsert policy: documents are keyed by asset code (`codigo`). A redelivered
//! message or a newer quote for the same asset overwrites the previous
//! document - last write wins. This matches the lookup API, which assumes at
//! most one live record per asset code.

mod memory;

pub use memory::MemoryQuoteStore;
