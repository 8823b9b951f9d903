use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid value {value:?}: {reason}")]
    ValueParse { value: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Hex decode error: {0}")]
    HexDecode(#[from] hex::FromHexError),
}
