use serde::{Deserialize, Serialize};

/// Tagged metadata attached to a transaction.
///
/// `usage` is not checked against any known set; its meaning belongs to
/// the protocol layer that consumes the attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxAttribute {
    pub usage: u8,
    pub data: Vec<u8>,
}

impl TxAttribute {
    pub fn new(usage: u8, data: impl Into<Vec<u8>>) -> Self {
        TxAttribute {
            usage,
            data: data.into(),
        }
    }

    /// Wire encoding: usage byte followed by the data, no length prefix
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(1 + self.data.len());
        bytes.push(self.usage);
        bytes.extend_from_slice(&self.data);
        bytes
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }
}
