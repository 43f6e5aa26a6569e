//! Quote Enrichment
//!
//! Turns a validated wire message into a persistence-ready document.
//! The reference date comes from the injected `now` - there is no hidden
//! clock read, which keeps enrichment deterministic under test.

use quotesink_core::{QuoteDocument, QuoteMessage, Timestamp};

/// Reference-date format written to the document store (ISO date)
const REFERENCE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Build the document for a message that passed validation.
///
/// Copies `codigo` and `valor` verbatim, nests the broker fields into the
/// responsible-broker sub-document, and stamps the reference date from `now`.
pub fn enrich(msg: &QuoteMessage, now: Timestamp) -> QuoteDocument {
    let data_referencia = now.format(REFERENCE_DATE_FORMAT).to_string();
    QuoteDocument::from_message(msg, data_referencia)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotesink_clock::FixedClock;
    use quotesink_ports::Clock;
    use rust_decimal_macros::dec;

    #[test]
    fn test_enrich_stamps_reference_date_from_injected_clock() {
        let msg = QuoteMessage::new("ABCD", dec!(100.98), "00000", "Corretora Testes");
        let clock = FixedClock::at_date(2026, 8, 29);

        let doc = enrich(&msg, clock.now());
        assert_eq!(doc.data_referencia, "2026-08-29");
    }

    #[test]
    fn test_enrich_copies_fields_and_nests_broker() {
        let msg = QuoteMessage::new("EFGH", dec!(200.9), "00000", "Corretora Testes");
        let clock = FixedClock::at_date(2026, 1, 2);

        let doc = enrich(&msg, clock.now());
        assert_eq!(doc.codigo, "EFGH");
        assert_eq!(doc.valor, dec!(200.9));
        assert_eq!(doc.corretora_responsavel.codigo, "00000");
        assert_eq!(doc.corretora_responsavel.nome, "Corretora Testes");
    }

    #[test]
    fn test_enrich_is_deterministic_for_same_inputs() {
        let msg = QuoteMessage::new("IJKL", dec!(1400.978), "00000", "Corretora Testes");
        let clock = FixedClock::at_date(2026, 8, 29);

        assert_eq!(enrich(&msg, clock.now()), enrich(&msg, clock.now()));
    }
}
