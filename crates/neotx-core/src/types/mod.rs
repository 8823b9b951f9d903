pub mod account;
pub mod asset;
pub mod attribute;
pub mod block;
pub mod transaction;
pub mod utxo;

pub use account::{AccountState, AssetBalance, Balance};
pub use asset::{AssetState, L10nString};
pub use attribute::TxAttribute;
pub use block::{Block, Witness};
pub use transaction::{Transaction, Vin, Vout};
pub use utxo::Utxo;
