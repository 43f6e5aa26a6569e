//! Quote Validation
//!
//! Applies the business rules a quotation must satisfy before it may be
//! persisted. This module doesn't track state - it just validates.
//!
//! Violations are returned as data, never raised as errors: revalidating
//! the same message always yields the same report.

use quotesink_core::QuoteMessage;
use rust_decimal::Decimal;

/// Field a rule violation refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteField {
    Codigo,
    Valor,
    CodCorretora,
    NomeCorretora,
}

/// A single business-rule violation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: QuoteField,
    pub message: String,
}

/// Result of validating one quotation message
///
/// An empty violation list means the message is valid. Violations keep
/// the field order of the wire schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}

/// Validates quotation messages against the business rules
///
/// Stateless and pure - no side effects, no clock, no I/O.
pub struct QuoteValidator;

impl QuoteValidator {
    /// Validate a message. Rules, in wire field order:
    /// 1. `codigo` non-empty and non-whitespace
    /// 2. `valor` strictly greater than zero
    /// 3. `codCorretora` non-empty
    /// 4. `nomeCorretora` non-empty
    pub fn validate(msg: &QuoteMessage) -> ValidationReport {
        let mut violations = Vec::new();

        if msg.codigo.trim().is_empty() {
            violations.push(Violation {
                field: QuoteField::Codigo,
                message: "Asset code (codigo) must not be empty".to_string(),
            });
        }

        if msg.valor <= Decimal::ZERO {
            violations.push(Violation {
                field: QuoteField::Valor,
                message: "Price (valor) must be greater than zero".to_string(),
            });
        }

        if msg.cod_corretora.trim().is_empty() {
            violations.push(Violation {
                field: QuoteField::CodCorretora,
                message: "Broker code (codCorretora) must not be empty".to_string(),
            });
        }

        if msg.nome_corretora.trim().is_empty() {
            violations.push(Violation {
                field: QuoteField::NomeCorretora,
                message: "Broker name (nomeCorretora) must not be empty".to_string(),
            });
        }

        ValidationReport { violations }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn valid_message() -> QuoteMessage {
        QuoteMessage::new("ABCD", dec!(100.98), "00000", "Corretora Testes")
    }

    #[test]
    fn test_valid_message_has_no_violations() {
        let report = QuoteValidator::validate(&valid_message());

        assert!(report.is_valid());
        assert!(report.violations().is_empty());
    }

    #[test]
    fn test_zero_price_names_the_price_field() {
        let mut msg = valid_message();
        msg.valor = Decimal::ZERO;
        let report = QuoteValidator::validate(&msg);

        assert!(!report.is_valid());
        assert_eq!(report.violations().len(), 1);
        assert_eq!(report.violations()[0].field, QuoteField::Valor);
    }

    #[test]
    fn test_negative_price_is_rejected_regardless_of_other_fields() {
        let mut msg = valid_message();
        msg.valor = dec!(-10.5);
        let report = QuoteValidator::validate(&msg);

        assert!(!report.is_valid());
        assert!(
            report
                .violations()
                .iter()
                .any(|v| v.field == QuoteField::Valor)
        );
    }

    #[test]
    fn test_whitespace_asset_code_is_rejected() {
        let mut msg = valid_message();
        msg.codigo = "   ".to_string();
        let report = QuoteValidator::validate(&msg);

        assert_eq!(report.violations().len(), 1);
        assert_eq!(report.violations()[0].field, QuoteField::Codigo);
    }

    #[test]
    fn test_empty_broker_code_is_rejected_even_with_valid_quote_fields() {
        let mut msg = valid_message();
        msg.cod_corretora = String::new();
        let report = QuoteValidator::validate(&msg);

        assert!(!report.is_valid());
        assert_eq!(report.violations().len(), 1);
        assert_eq!(report.violations()[0].field, QuoteField::CodCorretora);
    }

    #[test]
    fn test_empty_broker_name_is_rejected() {
        let mut msg = valid_message();
        msg.nome_corretora = String::new();
        let report = QuoteValidator::validate(&msg);

        assert_eq!(report.violations().len(), 1);
        assert_eq!(report.violations()[0].field, QuoteField::NomeCorretora);
    }

    #[test]
    fn test_violations_follow_wire_field_order() {
        let msg = QuoteMessage::new("", Decimal::ZERO, "", "");
        let report = QuoteValidator::validate(&msg);

        let fields: Vec<QuoteField> = report.violations().iter().map(|v| v.field).collect();
        assert_eq!(
            fields,
            vec![
                QuoteField::Codigo,
                QuoteField::Valor,
                QuoteField::CodCorretora,
                QuoteField::NomeCorretora,
            ]
        );
    }

    #[test]
    fn test_validation_is_idempotent() {
        let mut msg = valid_message();
        msg.valor = Decimal::ZERO;

        let first = QuoteValidator::validate(&msg);
        let second = QuoteValidator::validate(&msg);
        assert_eq!(first, second);
    }

    #[test]
    fn test_violation_messages_name_the_failing_field() {
        let msg = QuoteMessage::new("", dec!(1), "", "x");
        let report = QuoteValidator::validate(&msg);

        assert!(report.violations()[0].message.contains("codigo"));
        assert!(report.violations()[1].message.contains("codCorretora"));
    }
}
