use serde::{Deserialize, Serialize};

use crate::types::block::Witness;
use crate::types::utxo::Utxo;

/// A transaction output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vout {
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "Asset")]
    pub asset: String,
    /// Output index within its transaction
    #[serde(rename = "N")]
    pub n: u32,
    /// Decimal amount, kept as the node sent it
    #[serde(rename = "Value")]
    pub value: String,
}

/// A reference to a previous output being spent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vin {
    #[serde(rename = "Txid")]
    pub transaction_id: String,
    #[serde(rename = "Vout")]
    pub vout: u32,
}

/// A transaction as returned by the node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "Txid")]
    pub id: String,
    #[serde(rename = "Size")]
    pub size: i64,
    #[serde(rename = "Type")]
    pub tx_type: String,
    #[serde(rename = "Version")]
    pub version: i64,
    /// Attributes in the node's JSON shape, not decoded here
    #[serde(rename = "Attributes", default)]
    pub attributes: Vec<serde_json::Value>,
    #[serde(rename = "Vin", default)]
    pub vin: Vec<Vin>,
    #[serde(rename = "Vout", default)]
    pub vout: Vec<Vout>,
    #[serde(rename = "Sys_fee")]
    pub sys_fee: String,
    #[serde(rename = "Net_fee")]
    pub net_fee: String,
    #[serde(rename = "Scripts", default)]
    pub scripts: Vec<Witness>,
    #[serde(rename = "Nonce", default)]
    pub nonce: i64,
}

impl Transaction {
    /// Outputs of this transaction as spend candidates.
    ///
    /// Whether an output is still unspent is the node's business; callers
    /// should only pass transactions whose outputs the node reported as
    /// unspent.
    pub fn unspent_outputs(&self) -> Vec<Utxo> {
        self.vout
            .iter()
            .map(|out| Utxo::new(self.id.clone(), out.clone()))
            .collect()
    }

    /// Outputs paying to the given address
    pub fn outputs_to<'a>(&'a self, address: &'a str) -> impl Iterator<Item = &'a Vout> + 'a {
        self.vout.iter().filter(move |out| out.address == address)
    }
}
