use serde::{Deserialize, Serialize};

use crate::values::{AssetCode, Price};

/// Asset quotation as published on the queue.
///
/// Field names on the wire follow the upstream publisher's schema
/// (`codigo`, `valor`, `codCorretora`, `nomeCorretora`). There is no
/// version field; schema changes are breaking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteMessage {
    /// Asset code (e.g. "ABCD")
    pub codigo: AssetCode,
    /// Quoted price
    pub valor: Price,
    /// Code of the broker that originated the quote
    #[serde(rename = "codCorretora")]
    pub cod_corretora: String,
    /// Name of the broker that originated the quote
    #[serde(rename = "nomeCorretora")]
    pub nome_corretora: String,
}

impl QuoteMessage {
    pub fn new(
        codigo: impl Into<AssetCode>,
        valor: Price,
        cod_corretora: impl Into<String>,
        nome_corretora: impl Into<String>,
    ) -> Self {
        Self {
            codigo: codigo.into(),
            valor,
            cod_corretora: cod_corretora.into(),
            nome_corretora: nome_corretora.into(),
        }
    }
}
