use serde::{Deserialize, Serialize};

/// Localized name entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct L10nString {
    pub lang: String,
    pub name: String,
}

/// Registered asset state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetState {
    pub version: i64,
    pub id: String,
    #[serde(rename = "type")]
    pub asset_type: String,
    pub name: Vec<L10nString>,
    pub amount: String,
    pub available: String,
    pub precision: f64,
    pub owner: String,
    pub admin: String,
    pub issuer: String,
    pub expiration: f64,
    pub frozen: bool,
}

impl AssetState {
    /// Name for the given language tag, falling back to the first entry
    pub fn name_for(&self, lang: &str) -> Option<&str> {
        self.name
            .iter()
            .find(|n| n.lang == lang)
            .or_else(|| self.name.first())
            .map(|n| n.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AssetState {
        serde_json::from_str(
            r#"{
                "version": 0,
                "id": "0xc56f",
                "type": "GoverningToken",
                "name": [{"lang": "zh-CN", "name": "小蚁股"}, {"lang": "en", "name": "AntShare"}],
                "amount": "100000000",
                "available": "100000000",
                "precision": 0,
                "owner": "00",
                "admin": "Abf2",
                "issuer": "Abf2",
                "expiration": 4000000,
                "frozen": false
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_type_field_rename() {
        let state = sample();
        assert_eq!(state.asset_type, "GoverningToken");
        assert_eq!(state.name.len(), 2);
    }

    #[test]
    fn test_name_for_language() {
        let state = sample();
        assert_eq!(state.name_for("en"), Some("AntShare"));
        assert_eq!(state.name_for("fr"), Some("小蚁股"));
    }
}
