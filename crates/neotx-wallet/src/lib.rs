//! neotx Wallet - Coin selection
//!
//! This crate picks which unspent outputs fund a new transaction.

pub mod ordering;
pub mod selector;

pub use ordering::{ascending_by_value, by_value, Candidate};
pub use selector::{CoinSelector, Selection, SelectionError};
