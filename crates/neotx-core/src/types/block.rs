use serde::{Deserialize, Serialize};

use crate::types::transaction::Transaction;

/// Invocation/verification script pair, both hex encoded
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Witness {
    #[serde(rename = "Invocation")]
    pub invocation: String,
    #[serde(rename = "Verification")]
    pub verification: String,
}

/// A block as returned by the node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    #[serde(rename = "Confirmations")]
    pub confirmations: i64,
    #[serde(rename = "Hash")]
    pub hash: String,
    #[serde(rename = "Index")]
    pub index: i64,
    #[serde(rename = "Merkleroot")]
    pub merkle_root: String,
    #[serde(rename = "Nextblockhash", default)]
    pub next_block_hash: String,
    #[serde(rename = "Nextconsensus")]
    pub next_consensus: String,
    #[serde(rename = "Nonce")]
    pub nonce: String,
    #[serde(rename = "Previousblockhash", default)]
    pub previous_block_hash: String,
    #[serde(rename = "Size")]
    pub size: i64,
    #[serde(rename = "Time")]
    pub time: i64,
    #[serde(rename = "Version")]
    pub version: i64,
    #[serde(rename = "Script")]
    pub script: Witness,
    #[serde(rename = "Tx", default)]
    pub transactions: Vec<Transaction>,
}

impl Block {
    /// Find a transaction in this block by id
    pub fn transaction(&self, txid: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|tx| tx.id == txid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_deserialize() {
        let json = r#"{
            "Confirmations": 3, "Hash": "0xaa", "Index": 42, "Merkleroot": "0xbb",
            "Nextconsensus": "AZ8", "Nonce": "7f", "Size": 686, "Time": 1500000000,
            "Version": 0, "Script": {"Invocation": "40", "Verification": "55"},
            "Tx": [{
                "Txid": "0x01", "Size": 10, "Type": "MinerTransaction", "Version": 0,
                "Attributes": [], "Vin": [], "Vout": [], "Sys_fee": "0", "Net_fee": "0",
                "Scripts": [], "Nonce": 99
            }]
        }"#;

        let block: Block = serde_json::from_str(json).unwrap();
        assert_eq!(block.index, 42);
        assert!(block.previous_block_hash.is_empty());
        assert_eq!(block.script.verification, "55");
        assert_eq!(block.transaction("0x01").map(|tx| tx.nonce), Some(99));
        assert!(block.transaction("0x02").is_none());
    }
}
