pub mod mnemonic;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "rust_mnemonic")]
#[command(about = "BIP-39 mnemonic generation, validation and seed derivation", long_about = None)]
pub struct Cli {
    /// Config file (TOML)
    #[arg(long, global = true, default_value = "mnemonic.toml")]
    pub config: String,

    /// Wordlist file, one word per line (overrides config)
    #[arg(long, global = true)]
    pub wordlist: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate a random mnemonic
    Generate {
        /// Number of words (12, 15, 18, 21, 24)
        #[arg(long)]
        words: Option<usize>,
    },
    /// Encode hex entropy as a mnemonic
    FromEntropy {
        entropy: String,
    },
    /// Recover the entropy of a mnemonic, printed as hex
    ToEntropy {
        mnemonic: String,
    },
    /// Check word membership and checksum
    Validate {
        mnemonic: String,
    },
    /// Derive the 64-byte seed
    Seed {
        mnemonic: String,
        #[arg(long, default_value = "")]
        passphrase: String,
    },
}
