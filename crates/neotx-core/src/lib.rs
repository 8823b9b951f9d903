//! neotx Core - Node data types, spendable outputs and attribute encoding
//!
//! This crate provides the data model shared by the script codec and the
//! coin selector: the JSON shapes a node's query API returns, the
//! spendable output candidate with its memoized value, and the
//! transaction attribute wire encoding.

pub mod error;
pub mod serialize;
pub mod types;

pub use error::CoreError;
pub use types::*;
