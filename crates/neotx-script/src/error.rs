use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ScriptError {
    #[error("Script truncated at offset {offset}: need {needed} more bytes, have {available}")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("Push data too large: {0} bytes")]
    PushTooLarge(usize),

    #[error("Integer {0} has no single-opcode push")]
    NoSmallIntPush(i64),

    #[error("Hex decode error: {0}")]
    HexDecode(#[from] hex::FromHexError),
}
