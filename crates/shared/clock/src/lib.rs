//! Quotesink Clock Infrastructure
//!
//! Implementations of the `Clock` port:
//! - `SystemClock` for production wall-clock time
//! - `FixedClock` for deterministic tests (the enricher's reference date
//!   must be reproducible under test)

mod fixed;
mod system;

pub use fixed::FixedClock;
pub use system::SystemClock;
