use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use quotesink_core::QuoteDocument;
use quotesink_ports::{QuoteStore, StoreError, StoreResult};

/// Concurrent in-memory quote store, upserting by asset code
///
/// Safe for use by multiple in-flight pipeline invocations; concurrent
/// saves to the same code race with last-write-wins, matching the
/// single-write atomicity the port promises.
pub struct MemoryQuoteStore {
    documents: DashMap<String, QuoteDocument>,
    // Fault injection for exercising the retry path in tests
    fail_writes: AtomicBool,
}

impl MemoryQuoteStore {
    pub fn new() -> Self {
        Self {
            documents: DashMap::new(),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Toggle write failures (subsequent `save` calls return `Connection`
    /// errors until switched back off)
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of live documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl Default for MemoryQuoteStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuoteStore for MemoryQuoteStore {
    async fn save(&self, doc: &QuoteDocument) -> StoreResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Connection(
                "simulated store outage".to_string(),
            ));
        }
        self.documents.insert(doc.codigo.clone(), doc.clone());
        Ok(())
    }

    async fn find_by_code(&self, codigo: &str) -> StoreResult<Option<QuoteDocument>> {
        Ok(self.documents.get(codigo).map(|entry| entry.value().clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotesink_core::QuoteMessage;
    use rust_decimal_macros::dec;

    fn doc(codigo: &str, valor: rust_decimal::Decimal) -> QuoteDocument {
        let msg = QuoteMessage::new(codigo, valor, "00000", "Corretora Testes");
        QuoteDocument::from_message(&msg, "2026-08-29".to_string())
    }

    #[tokio::test]
    async fn test_save_then_find_round_trip() {
        let store = MemoryQuoteStore::new();
        store.save(&doc("ABCD", dec!(100.98))).await.unwrap();

        let found = store.find_by_code("ABCD").await.unwrap().unwrap();
        assert_eq!(found.valor, dec!(100.98));
    }

    #[tokio::test]
    async fn test_find_missing_code_returns_none() {
        let store = MemoryQuoteStore::new();
        assert!(store.find_by_code("ZZZZ").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_second_save_for_same_code_overwrites() {
        let store = MemoryQuoteStore::new();
        store.save(&doc("ABCD", dec!(100.98))).await.unwrap();
        store.save(&doc("ABCD", dec!(150.00))).await.unwrap();

        assert_eq!(store.len(), 1, "Upsert by code keeps a single document");
        let found = store.find_by_code("ABCD").await.unwrap().unwrap();
        assert_eq!(found.valor, dec!(150.00));
    }

    #[tokio::test]
    async fn test_injected_failure_and_recovery() {
        let store = MemoryQuoteStore::new();
        store.set_fail_writes(true);

        let err = store.save(&doc("ABCD", dec!(1))).await.unwrap_err();
        assert!(matches!(err, StoreError::Connection(_)));
        assert!(store.is_empty());

        store.set_fail_writes(false);
        store.save(&doc("ABCD", dec!(1))).await.unwrap();
        assert_eq!(store.len(), 1);
    }
}
