use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// neotx - transaction construction utilities
#[derive(Parser)]
#[command(name = "neotx")]
#[command(about = "Script encoding and coin selection utilities")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, default_value = "neotx.json")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        /// Output path for configuration file
        #[arg(short, long, default_value = "neotx.json")]
        output: PathBuf,
    },

    /// Disassemble a hex encoded script
    Disasm {
        /// Script bytes as hex
        script: String,
    },

    /// Encode a data push instruction
    Push {
        /// Data to push, as hex
        data: String,
    },

    /// Encode a transaction attribute
    Attr {
        /// Usage byte (decimal or 0x-prefixed hex)
        #[arg(short, long)]
        usage: String,

        /// Attribute payload as hex
        #[arg(short, long, default_value = "")]
        data: String,
    },

    /// Select unspent outputs to cover a target value
    Select {
        /// JSON file with the node's unspent output list
        #[arg(short, long)]
        utxos: PathBuf,

        /// Value to cover
        #[arg(short, long)]
        target: f64,

        /// Only spend outputs of this asset id (overrides the config default)
        #[arg(short, long)]
        asset: Option<String>,
    },

    /// List the opcode mnemonic table
    Opcodes,
}
