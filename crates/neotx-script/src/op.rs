use std::fmt;

use crate::error::ScriptError;
use crate::opcode::OpCode;

/// A single VM instruction: opcode plus inline operand bytes.
///
/// `arg` is written verbatim after the opcode. For PUSHDATA1/2/4 it must
/// already start with the little-endian length prefix; [`Op::push`] builds
/// correctly framed pushes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Op {
    pub code: OpCode,
    pub arg: Vec<u8>,
}

impl Op {
    /// An instruction with no operand
    pub fn new(code: OpCode) -> Self {
        Op {
            code,
            arg: Vec::new(),
        }
    }

    pub fn with_arg(code: OpCode, arg: impl Into<Vec<u8>>) -> Self {
        Op {
            code,
            arg: arg.into(),
        }
    }

    /// Push `data` using the smallest framing that fits
    pub fn push(data: &[u8]) -> Result<Self, ScriptError> {
        let len = data.len();

        if len == 0 {
            return Ok(Op::new(OpCode::PUSH0));
        }

        if len <= OpCode::PUSHBYTES75.0 as usize {
            return Ok(Op::with_arg(OpCode(len as u8), data));
        }

        let mut arg = Vec::with_capacity(len + 4);
        let code = if len <= u8::MAX as usize {
            arg.push(len as u8);
            OpCode::PUSHDATA1
        } else if len <= u16::MAX as usize {
            arg.extend_from_slice(&(len as u16).to_le_bytes());
            OpCode::PUSHDATA2
        } else {
            let len32 = u32::try_from(len).map_err(|_| ScriptError::PushTooLarge(len))?;
            arg.extend_from_slice(&len32.to_le_bytes());
            OpCode::PUSHDATA4
        };
        arg.extend_from_slice(data);

        Ok(Op { code, arg })
    }

    /// Push a small integer with a single opcode (-1..=16)
    pub fn push_int(n: i64) -> Result<Self, ScriptError> {
        match n {
            -1 => Ok(Op::new(OpCode::PUSHM1)),
            0 => Ok(Op::new(OpCode::PUSH0)),
            1..=16 => Ok(Op::new(OpCode(OpCode::PUSH1.0 + (n as u8 - 1)))),
            _ => Err(ScriptError::NoSmallIntPush(n)),
        }
    }

    /// Payload of a push instruction with any length prefix stripped.
    ///
    /// Returns `arg` unchanged for other opcodes, and `None` when a
    /// PUSHDATA prefix is missing or disagrees with the payload size.
    pub fn data(&self) -> Option<&[u8]> {
        let prefix = prefix_len(self.code);
        if prefix == 0 {
            return Some(&self.arg);
        }

        let header = self.arg.get(..prefix)?;
        let declared = read_le(header);
        let body = &self.arg[prefix..];
        (declared == body.len()).then_some(body)
    }

    /// Wire encoding: opcode byte then `arg` as-is
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(1 + self.arg.len());
        self.write_to(&mut bytes);
        bytes
    }

    /// Append the wire encoding to `out`
    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.push(self.code.0);
        out.extend_from_slice(&self.arg);
    }

    /// Encoded length in bytes
    pub fn encoded_len(&self) -> usize {
        1 + self.arg.len()
    }
}

/// Size of the length prefix a PUSHDATA opcode expects inside `arg`
pub(crate) fn prefix_len(code: OpCode) -> usize {
    match code {
        OpCode::PUSHDATA1 => 1,
        OpCode::PUSHDATA2 => 2,
        OpCode::PUSHDATA4 => 4,
        _ => 0,
    }
}

/// Little-endian unsigned read of a 1, 2 or 4 byte prefix
pub(crate) fn read_le(bytes: &[u8]) -> usize {
    bytes
        .iter()
        .rev()
        .fold(0usize, |acc, b| (acc << 8) | *b as usize)
}

impl From<OpCode> for Op {
    fn from(code: OpCode) -> Self {
        Op::new(code)
    }
}

/// Two-line disassembly: mnemonic, then the operand in lowercase hex.
/// For diagnostics only; the text is not meant to be parsed back.
impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.code.name(), hex::encode(&self.arg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_bytes_prepends_code() {
        let op = Op::with_arg(OpCode(0x03), vec![0xAA, 0xBB, 0xCC]);
        let bytes = op.to_bytes();

        assert_eq!(bytes.len(), 1 + op.arg.len());
        assert_eq!(bytes, vec![0x03, 0xAA, 0xBB, 0xCC]);
        assert_eq!(op.encoded_len(), 4);
    }

    #[test]
    fn test_to_bytes_does_not_frame_pushdata() {
        let op = Op::with_arg(OpCode::PUSHDATA1, vec![0x01, 0x02]);
        assert_eq!(op.to_bytes(), vec![0x4C, 0x01, 0x02]);
    }

    #[test]
    fn test_to_bytes_any_code_any_arg() {
        for code in [0x00u8, 0x4B, 0xAC, 0xFF] {
            for arg_len in [0usize, 1, 80, 300] {
                let op = Op::with_arg(OpCode(code), vec![0x5A; arg_len]);
                let bytes = op.to_bytes();
                assert_eq!(bytes.len(), 1 + arg_len);
                assert_eq!(bytes[0], code);
            }
        }
    }

    #[test]
    fn test_display_disassembly() {
        let op = Op::with_arg(OpCode::PUSHBYTES1, vec![0xAB]);
        assert_eq!(op.to_string(), "PUSHBYTES1 \nab");

        let op = Op::new(OpCode::CHECKSIG);
        assert_eq!(op.to_string(), "CHECKSIG   \n");
    }

    #[test]
    fn test_display_unknown_code_is_blank() {
        let op = Op::with_arg(OpCode(0xEE), vec![0x01, 0xFF]);
        assert_eq!(op.to_string(), "\n01ff");
    }

    #[test]
    fn test_push_empty() {
        assert_eq!(Op::push(&[]).unwrap(), Op::new(OpCode::PUSH0));
    }

    #[test]
    fn test_push_bytes_range() {
        let op = Op::push(&[7u8; 33]).unwrap();
        assert_eq!(op.code, OpCode(33));
        assert_eq!(op.arg.len(), 33);

        let op = Op::push(&[7u8; 75]).unwrap();
        assert_eq!(op.code, OpCode::PUSHBYTES75);
    }

    #[test]
    fn test_push_data_prefixes() {
        let op = Op::push(&[1u8; 76]).unwrap();
        assert_eq!(op.code, OpCode::PUSHDATA1);
        assert_eq!(op.arg[0], 76);
        assert_eq!(op.data().unwrap().len(), 76);

        let op = Op::push(&[1u8; 256]).unwrap();
        assert_eq!(op.code, OpCode::PUSHDATA2);
        assert_eq!(&op.arg[..2], &[0x00u8, 0x01]);
        assert_eq!(op.data().unwrap().len(), 256);

        let op = Op::push(&vec![1u8; 70_000]).unwrap();
        assert_eq!(op.code, OpCode::PUSHDATA4);
        assert_eq!(&op.arg[..4], &70_000u32.to_le_bytes());
        assert_eq!(op.data().unwrap().len(), 70_000);
    }

    #[test]
    fn test_data_rejects_bad_prefix() {
        let op = Op::with_arg(OpCode::PUSHDATA1, vec![0x05, 0x01]);
        assert!(op.data().is_none());

        let op = Op::with_arg(OpCode::PUSHDATA2, vec![0x01]);
        assert!(op.data().is_none());
    }

    #[test]
    fn test_push_int() {
        assert_eq!(Op::push_int(-1).unwrap().code, OpCode::PUSHM1);
        assert_eq!(Op::push_int(0).unwrap().code, OpCode::PUSH0);
        assert_eq!(Op::push_int(1).unwrap().code, OpCode::PUSH1);
        assert_eq!(Op::push_int(16).unwrap().code, OpCode::PUSH16);
        assert_eq!(Op::push_int(17), Err(ScriptError::NoSmallIntPush(17)));
        assert!(Op::push_int(-2).is_err());
    }
}
