//! Coin selection integration tests

use neotx_core::serialize::from_json;
use neotx_core::{Transaction, TxAttribute, Utxo, Vout};
use neotx_script::{OpCode, Script};
use neotx_wallet::{CoinSelector, SelectionError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const NEO: &str = "0xc56f33fc6ecfcd0c225c4ab356fee59390af8560be0e930faebe74a6daff7c9b";

/// Random candidate set with values in thousandths
fn random_set(rng: &mut StdRng, len: usize) -> Vec<Utxo> {
    (0..len)
        .map(|i| {
            let millis: u32 = rng.gen_range(1..=50_000);
            Utxo::new(
                format!("{:064x}", i),
                Vout {
                    address: "AK2nJJpJr6o664CWJKi1QRXjqeic2zRp8y".to_string(),
                    asset: NEO.to_string(),
                    n: i as u32,
                    value: format!("{}.{:03}", millis / 1000, millis % 1000),
                },
            )
        })
        .collect()
}

fn sum(utxos: &[&Utxo]) -> f64 {
    utxos.iter().fold(0.0, |acc, u| acc + u.value().unwrap())
}

#[test]
fn test_random_sets_are_sufficiently_funded() {
    let mut rng = StdRng::seed_from_u64(0x5e1ec7);

    for _ in 0..200 {
        let len = rng.gen_range(1..=20);
        let candidates = random_set(&mut rng, len);
        let refs: Vec<&Utxo> = candidates.iter().collect();
        let available = sum(&refs);
        let target = rng.gen_range(0.0..available - 0.0005);

        let selection = CoinSelector::new().select(&candidates, target).unwrap();

        // Sufficient
        assert!(selection.total >= target);
        assert_eq!(selection.total, sum(&selection.inputs));

        // Ascending, and every chosen output is no larger than any skipped one
        let chosen: Vec<f64> = selection.inputs.iter().map(|u| u.value().unwrap()).collect();
        assert!(chosen.windows(2).all(|w| w[0] <= w[1]));
        if let Some(largest) = chosen.last() {
            let skipped_min = candidates
                .iter()
                .filter(|c| !selection.inputs.iter().any(|s| std::ptr::eq(*s, *c)))
                .map(|c| c.value().unwrap())
                .fold(f64::INFINITY, f64::min);
            assert!(*largest <= skipped_min);
        }

        // Dropping the last (largest) chosen output falls short
        if let Some((_, rest)) = selection.inputs.split_last() {
            assert!(sum(rest) < target);
        }
    }
}

#[test]
fn test_random_sets_above_total_are_rejected() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..50 {
        let len = rng.gen_range(0..=10);
        let candidates = random_set(&mut rng, len);
        let refs: Vec<&Utxo> = candidates.iter().collect();
        let target = sum(&refs) + rng.gen_range(0.001..10.0);

        let result = CoinSelector::new().select(&candidates, target);
        assert!(matches!(
            result,
            Err(SelectionError::InsufficientFunds { required, .. }) if required == target
        ));
    }
}

#[test]
fn test_fund_from_node_transaction() {
    let json = r#"{
        "Txid": "f999c36145a41306c846ea80290416143e8e856559818065be3f4e143c60e43a",
        "Size": 262, "Type": "ContractTransaction", "Version": 0, "Attributes": [],
        "Vin": [],
        "Vout": [
            {"Address": "AK2nJJpJr6o664CWJKi1QRXjqeic2zRp8y", "Asset": "0xc56f33fc6ecfcd0c225c4ab356fee59390af8560be0e930faebe74a6daff7c9b", "N": 0, "Value": "7"},
            {"Address": "AK2nJJpJr6o664CWJKi1QRXjqeic2zRp8y", "Asset": "0x602c79718b16e442de58778e148d0b1084e3b2dffd5de6b7b16cee7969282de7", "N": 1, "Value": "0.25"},
            {"Address": "AK2nJJpJr6o664CWJKi1QRXjqeic2zRp8y", "Asset": "0xc56f33fc6ecfcd0c225c4ab356fee59390af8560be0e930faebe74a6daff7c9b", "N": 2, "Value": "3"}
        ],
        "Sys_fee": "0", "Net_fee": "0", "Scripts": [], "Nonce": 0
    }"#;

    let tx: Transaction = from_json(json).unwrap();
    let candidates = tx.unspent_outputs();

    let selection = CoinSelector::for_asset(NEO).select(&candidates, 5.0).unwrap();
    let indexes: Vec<u32> = selection.inputs.iter().map(|u| u.index()).collect();
    assert_eq!(indexes, vec![2, 0]);
    assert_eq!(selection.change(), 5.0);

    // Inputs reference the source transaction by its raw id bytes
    let prev_hash = selection.inputs[0].tx_id_bytes().unwrap();
    assert_eq!(prev_hash.len(), 32);
    assert_eq!(prev_hash[0], 0xF9);

    // Witness verification script and a remark attribute for the new transaction
    let mut verification = Script::new();
    verification
        .emit_push(&[0x03; 33])
        .unwrap()
        .emit(OpCode::CHECKSIG);
    let bytes = verification.to_bytes();
    assert_eq!(bytes.first(), Some(&0x21));
    assert_eq!(bytes.last(), Some(&0xAC));

    let remark = TxAttribute::new(0xF0, b"change".to_vec());
    assert_eq!(remark.to_bytes()[0], 0xF0);
    assert_eq!(remark.to_bytes().len(), 7);
}

#[test]
fn test_unspent_list_from_node_json() {
    let json = r#"[
        {"txid": "aa", "vout": {"Address": "A", "Asset": "0x01", "N": 0, "Value": "1.0"}},
        {"txid": "bb", "vout": {"Address": "A", "Asset": "0x01", "N": 0, "Value": "2.5"}},
        {"txid": "cc", "vout": {"Address": "A", "Asset": "0x01", "N": 0, "Value": "0.5"}}
    ]"#;

    let candidates: Vec<Utxo> = from_json(json).unwrap();
    let selection = CoinSelector::new().select(&candidates, 2.0).unwrap();

    let ids: Vec<&str> = selection.inputs.iter().map(|u| u.tx_id()).collect();
    assert_eq!(ids, vec!["cc", "aa", "bb"]);
    assert_eq!(selection.total, 4.0);
}
