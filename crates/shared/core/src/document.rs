use serde::{Deserialize, Serialize};

use crate::message::QuoteMessage;
use crate::values::{AssetCode, Price};

/// Broker responsible for a persisted quotation (document sub-record)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrokerRef {
    pub codigo: String,
    pub nome: String,
}

/// Quotation record as written to the document store.
///
/// Built only from a message that passed validation. `dataReferencia` is
/// assigned at enrichment time from an injected clock, never taken from
/// the publisher. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteDocument {
    pub codigo: AssetCode,
    pub valor: Price,
    /// Processing date (ISO, `YYYY-MM-DD`)
    #[serde(rename = "dataReferencia")]
    pub data_referencia: String,
    #[serde(rename = "corretoraResponsavel")]
    pub corretora_responsavel: BrokerRef,
}

impl QuoteDocument {
    /// Build a document from a validated message and a reference date.
    pub fn from_message(msg: &QuoteMessage, data_referencia: String) -> Self {
        Self {
            codigo: msg.codigo.clone(),
            valor: msg.valor,
            data_referencia,
            corretora_responsavel: BrokerRef {
                codigo: msg.cod_corretora.clone(),
                nome: msg.nome_corretora.clone(),
            },
        }
    }
}
