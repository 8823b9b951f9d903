use anyhow::Result;
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod cli;
mod commands;
mod config;

use cli::{Cli, Commands};
use config::CliConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, config_error) = match CliConfig::load_or_default(&cli.config) {
        Ok(config) => (config, None),
        Err(e) => (CliConfig::default(), Some(e)),
    };

    // Initialize logging; stdout is reserved for command output
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Some(e) = config_error {
        warn!("Ignoring unreadable config {:?}: {}", cli.config, e);
    } else {
        debug!("Using configuration {:?}", config);
    }

    match cli.command {
        Commands::Init { output } => {
            commands::init_config(&output)?;
            println!("Configuration file created: {}", output.display());
        }
        Commands::Disasm { script } => {
            println!("{}", commands::disassemble(&script)?);
        }
        Commands::Push { data } => {
            println!("{}", commands::encode_push(&data)?);
        }
        Commands::Attr { usage, data } => {
            println!("{}", commands::encode_attribute(&usage, &data)?);
        }
        Commands::Select {
            utxos,
            target,
            asset,
        } => {
            let asset = asset.or_else(|| config.default_asset.clone());
            let report = commands::select(&utxos, target, asset.as_deref())?;
            println!("{}", config.render(&report)?);
        }
        Commands::Opcodes => {
            println!("{}", commands::opcode_table());
        }
    }

    Ok(())
}
