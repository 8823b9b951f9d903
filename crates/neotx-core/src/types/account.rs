use serde::{Deserialize, Serialize};

/// Balance of one asset held by an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetBalance {
    pub asset: String,
    pub value: String,
}

/// Address balance as reported by the node's balance query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    pub balance: String,
    pub confirmed: String,
}

/// Account state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountState {
    pub version: i64,
    pub script_hash: String,
    pub frozen: bool,
    /// Opaque vote list, passed through untouched
    #[serde(default)]
    pub votes: serde_json::Value,
    #[serde(default)]
    pub balances: Vec<AssetBalance>,
}

impl AccountState {
    /// Look up the balance string for an asset id
    pub fn balance_of(&self, asset: &str) -> Option<&str> {
        self.balances
            .iter()
            .find(|b| b.asset == asset)
            .map(|b| b.value.as_str())
    }
}
