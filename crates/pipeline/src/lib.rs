//! Quotesink Pipeline
//!
//! The message-processing core: decode -> validate -> enrich -> persist.
//! One `QuoteProcessor` invocation handles one queue delivery; the failure
//! policy distinguishes poison messages (never retried), business-rule
//! rejections (dropped), and persistence failures (retried by redelivery).

pub mod enrich;
pub mod error;
pub mod processor;
pub mod validator;

pub use enrich::enrich;
pub use error::{ProcessorError, Result};
pub use processor::{Outcome, QuoteProcessor};
pub use validator::{QuoteField, QuoteValidator, ValidationReport, Violation};
