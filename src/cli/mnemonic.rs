use serde_json::json;
use tracing::debug;

use crate::cli::Commands;
use crate::config::MnemonicConfig;
use crate::error::{Bip39Error, Result};
use crate::mnemonic::Mnemonic;
use crate::wordlist::Wordlist;

/// English words are unique in their first four letters.
const SUGGESTION_PREFIX_LEN: usize = 4;
const MAX_SUGGESTIONS: usize = 8;

/// Text to print for a command, and whether the process should exit cleanly.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutput {
    pub text: String,
    pub success: bool,
}

impl CommandOutput {
    fn ok(text: String) -> Self {
        CommandOutput { text, success: true }
    }
}

/// Run one command.
///
/// `validate` reports an invalid mnemonic as unsuccessful output (with
/// suggestions for an unknown word); every other failure is returned as `Err`.
pub fn handle_command(
    cmd: Commands,
    wordlist: &Wordlist,
    config: &MnemonicConfig,
    json_output: bool,
) -> Result<CommandOutput> {
    match cmd {
        Commands::Generate { words } => {
            let count = words.unwrap_or(config.cli.default_words_count);
            debug!("Generating {}-word mnemonic", count);
            let mnemonic = Mnemonic::from_words_count(count, wordlist)?;
            Ok(CommandOutput::ok(if json_output {
                json!({ "mnemonic": mnemonic.as_str(), "words": count }).to_string()
            } else {
                mnemonic.to_string()
            }))
        }
        Commands::FromEntropy { entropy } => {
            let bytes = hex::decode(entropy.trim())?;
            let mnemonic = Mnemonic::from_entropy(&bytes, wordlist)?;
            Ok(CommandOutput::ok(if json_output {
                json!({ "mnemonic": mnemonic.as_str(), "words": mnemonic.word_count() }).to_string()
            } else {
                mnemonic.to_string()
            }))
        }
        Commands::ToEntropy { mnemonic } => {
            let entropy = Mnemonic::from_text(&mnemonic).to_entropy(wordlist)?;
            Ok(CommandOutput::ok(if json_output {
                json!({ "entropy": hex::encode(&entropy), "bits": entropy.len() * 8 }).to_string()
            } else {
                hex::encode(&entropy)
            }))
        }
        Commands::Validate { mnemonic } => {
            let mnemonic = Mnemonic::from_text(&mnemonic);
            Ok(validation_report(mnemonic.validate(wordlist), wordlist, json_output))
        }
        Commands::Seed { mnemonic, passphrase } => {
            let seed = Mnemonic::from_text(&mnemonic).generate_seed(&passphrase, wordlist)?;
            Ok(CommandOutput::ok(if json_output {
                json!({ "seed": hex::encode(seed) }).to_string()
            } else {
                hex::encode(seed)
            }))
        }
    }
}

fn validation_report(result: Result<()>, wordlist: &Wordlist, json_output: bool) -> CommandOutput {
    let e = match result {
        Ok(()) => {
            return CommandOutput::ok(if json_output {
                json!({ "valid": true }).to_string()
            } else {
                "valid".to_string()
            })
        }
        Err(e) => e,
    };

    let hint = match &e {
        Bip39Error::InvalidWord { word, .. } => suggestions(wordlist, word),
        _ => Vec::new(),
    };
    let text = if json_output {
        json!({ "valid": false, "error": e.to_string(), "suggestions": hint }).to_string()
    } else if hint.is_empty() {
        format!("invalid: {}", e)
    } else {
        format!("invalid: {}\nDid you mean: {}?", e, hint.join(", "))
    };
    CommandOutput { text, success: false }
}

/// Wordlist entries sharing the leading letters of an unknown word.
pub fn suggestions(wordlist: &Wordlist, word: &str) -> Vec<String> {
    let prefix: String = word.chars().take(SUGGESTION_PREFIX_LEN).collect();
    if prefix.is_empty() {
        return Vec::new();
    }
    wordlist
        .words_by_prefix(&prefix)
        .iter()
        .take(MAX_SUGGESTIONS)
        .cloned()
        .collect()
}
