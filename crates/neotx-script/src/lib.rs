//! neotx Script - VM instruction encoding and disassembly
//!
//! This crate provides the opcode mnemonic table, single instruction
//! encoding, push-data framing and whole-script decoding.

pub mod error;
pub mod op;
pub mod opcode;
pub mod script;

pub use error::ScriptError;
pub use op::Op;
pub use opcode::{OpCode, MNEMONIC_WIDTH};
pub use script::Script;
