use std::cell::Cell;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::transaction::Vout;

#[cfg(test)]
thread_local! {
    static PARSE_CALLS: Cell<usize> = const { Cell::new(0) };
}

/// An unspent output that can be consumed as a transaction input.
///
/// The numeric value is parsed from the decimal string on first use and
/// memoized. The cache lives in a [`Cell`], so a `Utxo` is `!Sync`: share
/// a candidate set across threads only behind a lock, or resolve every
/// value before fanning out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Utxo {
    #[serde(rename = "txid")]
    transaction_id: String,
    vout: Vout,
    #[serde(skip)]
    cached_value: Cell<Option<f64>>,
}

impl Utxo {
    pub fn new(transaction_id: impl Into<String>, vout: Vout) -> Self {
        Utxo {
            transaction_id: transaction_id.into(),
            vout,
            cached_value: Cell::new(None),
        }
    }

    /// Hex id of the transaction that created this output
    pub fn tx_id(&self) -> &str {
        &self.transaction_id
    }

    /// Output index within the source transaction
    pub fn index(&self) -> u32 {
        self.vout.n
    }

    pub fn asset(&self) -> &str {
        &self.vout.asset
    }

    pub fn address(&self) -> &str {
        &self.vout.address
    }

    /// The decimal value string as received
    pub fn raw_value(&self) -> &str {
        &self.vout.value
    }

    pub fn output(&self) -> &Vout {
        &self.vout
    }

    /// Whether the value has already been parsed and cached
    pub fn is_resolved(&self) -> bool {
        self.cached_value.get().is_some()
    }

    /// Resolve the numeric value, parsing at most once on success.
    ///
    /// A failed parse leaves the cache empty, so a later call parses again.
    pub fn value(&self) -> Result<f64, CoreError> {
        if let Some(value) = self.cached_value.get() {
            return Ok(value);
        }

        let value = parse_value(&self.vout.value)?;
        self.cached_value.set(Some(value));
        Ok(value)
    }

    /// Raw bytes of the source transaction id
    pub fn tx_id_bytes(&self) -> Result<Vec<u8>, CoreError> {
        Ok(hex::decode(&self.transaction_id)?)
    }
}

fn parse_value(raw: &str) -> Result<f64, CoreError> {
    #[cfg(test)]
    PARSE_CALLS.with(|calls| calls.set(calls.get() + 1));

    let value: f64 = raw.parse().map_err(|e: std::num::ParseFloatError| CoreError::ValueParse {
        value: raw.to_string(),
        reason: e.to_string(),
    })?;

    // "inf" and "NaN" parse, but cannot be summed or ordered as amounts
    if !value.is_finite() {
        return Err(CoreError::ValueParse {
            value: raw.to_string(),
            reason: "not a finite number".to_string(),
        });
    }

    if value < 0.0 {
        return Err(CoreError::ValueParse {
            value: raw.to_string(),
            reason: "negative amount".to_string(),
        });
    }

    Ok(value)
}
