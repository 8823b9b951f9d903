use std::fmt;

use tracing::debug;

use crate::error::ScriptError;
use crate::op::{prefix_len, read_le, Op};
use crate::opcode::OpCode;

/// An ordered sequence of instructions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    ops: Vec<Op>,
}

impl Script {
    pub fn new() -> Self {
        Script::default()
    }

    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Op> {
        self.ops.iter()
    }

    /// Append an instruction
    pub fn emit(&mut self, op: impl Into<Op>) -> &mut Self {
        self.ops.push(op.into());
        self
    }

    /// Append a framed data push
    pub fn emit_push(&mut self, data: &[u8]) -> Result<&mut Self, ScriptError> {
        self.ops.push(Op::push(data)?);
        Ok(self)
    }

    /// Append a small integer push (-1..=16)
    pub fn emit_int(&mut self, n: i64) -> Result<&mut Self, ScriptError> {
        self.ops.push(Op::push_int(n)?);
        Ok(self)
    }

    /// Concatenated wire encoding of every instruction
    pub fn to_bytes(&self) -> Vec<u8> {
        let size = self.ops.iter().map(Op::encoded_len).sum();
        let mut bytes = Vec::with_capacity(size);
        for op in &self.ops {
            op.write_to(&mut bytes);
        }
        bytes
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Decode a script, reading operand sizes from each opcode.
    ///
    /// PUSHBYTES1..75 carry `code` bytes; PUSHDATA1/2/4 carry a
    /// little-endian length prefix that stays in `arg`, so re-encoding the
    /// result gives back `bytes` exactly.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ScriptError> {
        let mut ops = Vec::new();
        let mut pos = 0;

        while pos < bytes.len() {
            let code = OpCode(bytes[pos]);
            let start = pos + 1;

            let arg_len = if code.is_push_bytes() {
                code.0 as usize
            } else {
                match prefix_len(code) {
                    0 => 0,
                    prefix => {
                        let header = take(bytes, start, prefix)?;
                        prefix.saturating_add(read_le(header))
                    }
                }
            };

            let arg = take(bytes, start, arg_len)?;
            ops.push(Op::with_arg(code, arg));
            pos = start + arg_len;
        }

        Ok(Script { ops })
    }

    pub fn from_hex(s: &str) -> Result<Self, ScriptError> {
        let bytes = hex::decode(s)?;
        Self::from_bytes(&bytes)
    }
}

fn take(bytes: &[u8], offset: usize, needed: usize) -> Result<&[u8], ScriptError> {
    let available = bytes.len() - offset;
    if needed > available {
        debug!(
            "Script truncated at offset {}: need {}, have {}",
            offset, needed, available
        );
        return Err(ScriptError::Truncated {
            offset,
            needed,
            available,
        });
    }
    Ok(&bytes[offset..offset + needed])
}

impl From<Vec<Op>> for Script {
    fn from(ops: Vec<Op>) -> Self {
        Script { ops }
    }
}

impl FromIterator<Op> for Script {
    fn from_iter<I: IntoIterator<Item = Op>>(iter: I) -> Self {
        Script {
            ops: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Script {
    type Item = &'a Op;
    type IntoIter = std::slice::Iter<'a, Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

/// Disassembly of every instruction, one after another
impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, op) in self.ops.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", op)?;
        }
        Ok(())
    }
}
