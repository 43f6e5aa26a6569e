use async_trait::async_trait;
use quotesink_core::QuoteDocument;

use crate::error::StoreResult;

/// Port for the quotation document store
///
/// The storage engine behind this trait is opaque to the pipeline: it only
/// needs an upsert and a point lookup. Implementations must be safe for
/// concurrent use by multiple in-flight pipeline invocations.
#[async_trait]
pub trait QuoteStore: Send + Sync {
    /// Upsert a quotation document.
    ///
    /// Single-write atomicity only; the pipeline never asks for
    /// cross-record transactions.
    async fn save(&self, doc: &QuoteDocument) -> StoreResult<()>;

    /// Point lookup by asset code. Returns at most one live record.
    ///
    /// Read-only; used by the verification harness, not by the pipeline.
    async fn find_by_code(&self, codigo: &str) -> StoreResult<Option<QuoteDocument>>;
}
