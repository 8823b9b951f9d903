use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use serde::Serialize;
use tracing::{info, warn};

use neotx_core::serialize::from_json_bytes;
use neotx_core::{TxAttribute, Utxo};
use neotx_script::{Op, OpCode, Script};
use neotx_wallet::CoinSelector;

use crate::config::CliConfig;

/// Chosen input as printed by `select`
#[derive(Debug, Serialize)]
pub struct InputRef {
    pub txid: String,
    pub n: u32,
    pub address: String,
    pub asset: String,
    pub value: String,
}

/// Outcome of `select`
#[derive(Debug, Serialize)]
pub struct SelectReport {
    pub target: f64,
    pub total: f64,
    pub change: f64,
    pub inputs: Vec<InputRef>,
    /// Candidate positions left out because their value did not parse
    pub unresolved: Vec<usize>,
}

/// Disassemble hex script bytes, one instruction per block
pub fn disassemble(script_hex: &str) -> Result<String> {
    let script = Script::from_hex(script_hex.trim())?;
    info!("Decoded {} instructions", script.len());
    Ok(script.to_string())
}

/// Hex encoding of a framed push of `data_hex`
pub fn encode_push(data_hex: &str) -> Result<String> {
    let data = parse_hex(data_hex)?;
    let op = Op::push(&data)?;
    Ok(hex::encode(op.to_bytes()))
}

/// Hex encoding of a transaction attribute
pub fn encode_attribute(usage: &str, data_hex: &str) -> Result<String> {
    let attr = TxAttribute::new(parse_usage(usage)?, parse_hex(data_hex)?);
    Ok(attr.to_hex())
}

/// Run coin selection over the unspent outputs in `utxos_path`
pub fn select(utxos_path: &Path, target: f64, asset: Option<&str>) -> Result<SelectReport> {
    let content = std::fs::read(utxos_path)
        .with_context(|| format!("reading {}", utxos_path.display()))?;
    let candidates: Vec<Utxo> = from_json_bytes(&content)?;
    info!("Loaded {} candidate outputs", candidates.len());

    let selector = match asset {
        Some(asset) => CoinSelector::for_asset(asset),
        None => CoinSelector::new(),
    };
    let selection = selector.select(&candidates, target)?;

    if !selection.unresolved.is_empty() {
        warn!(
            "{} outputs had unparsable values and were not considered",
            selection.unresolved.len()
        );
    }

    Ok(SelectReport {
        target,
        total: selection.total,
        change: selection.change(),
        inputs: selection
            .inputs
            .iter()
            .map(|utxo| InputRef {
                txid: utxo.tx_id().to_string(),
                n: utxo.index(),
                address: utxo.address().to_string(),
                asset: utxo.output().asset.clone(),
                value: utxo.raw_value().to_string(),
            })
            .collect(),
        unresolved: selection.unresolved.clone(),
    })
}

/// Mnemonic table, one `0xNN NAME` line per opcode
pub fn opcode_table() -> String {
    OpCode::ALL
        .iter()
        .map(|code| format!("0x{:02x} {}", code.as_u8(), code.name().trim_end()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write a default configuration file
pub fn init_config(output: &Path) -> Result<()> {
    if output.exists() {
        bail!("{} already exists", output.display());
    }
    CliConfig::default().save(output)?;
    info!("Configuration saved to {:?}", output);
    Ok(())
}

fn parse_hex(input: &str) -> Result<Vec<u8>> {
    let input = input.trim();
    let input = input.strip_prefix("0x").unwrap_or(input);
    hex::decode(input).map_err(|e| anyhow!("invalid hex '{}': {}", input, e))
}

fn parse_usage(input: &str) -> Result<u8> {
    let input = input.trim();
    let parsed = match input.strip_prefix("0x").or_else(|| input.strip_prefix("0X")) {
        Some(hex_digits) => u8::from_str_radix(hex_digits, 16),
        None => input.parse::<u8>(),
    };
    parsed.map_err(|e| anyhow!("invalid usage byte '{}': {}", input, e))
}
