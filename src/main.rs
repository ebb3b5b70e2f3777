use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rust_mnemonic::cli::{self, Cli};
use rust_mnemonic::config::MnemonicConfig;
use rust_mnemonic::wordlist::Wordlist;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // RUST_LOG wins; config file level is read without logging first
    let config_level = std::fs::read_to_string(&cli.config)
        .ok()
        .and_then(|s| MnemonicConfig::from_toml(&s).ok())
        .map(|c| c.cli.log_level)
        .unwrap_or_else(|| MnemonicConfig::default().cli.log_level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = MnemonicConfig::load_or_default(&cli.config);

    let wordlist = match cli.wordlist.as_ref().or(config.cli.wordlist_path.as_ref()) {
        Some(path) => {
            info!("Using wordlist file {}", path);
            Wordlist::load(path)?
        }
        None => Wordlist::english(),
    };

    let output = cli::mnemonic::handle_command(cli.command, &wordlist, &config, cli.json)?;
    println!("{}", output.text);
    if !output.success {
        std::process::exit(1);
    }
    Ok(())
}
