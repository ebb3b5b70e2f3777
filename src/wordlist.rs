//! Wordlist index: 2048 sorted, unique words addressed by their 11-bit position.

use std::fs;
use std::path::Path;

use bip39::Language;
use tracing::debug;

use crate::error::{Bip39Error, Result};

/// Number of words in every BIP-39 wordlist.
pub const WORDLIST_LEN: usize = 2048;

/// Immutable, validated wordlist. Shared by reference with the codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wordlist {
    words: Vec<String>,
}

impl Wordlist {
    /// The standard English list, taken from the `bip39` crate's bundled asset.
    pub fn english() -> Self {
        let words: Vec<String> = Language::English
            .word_list()
            .iter()
            .map(|w| w.to_string())
            .collect();
        debug_assert!(check_words(&words).is_ok(), "bundled English wordlist is malformed");
        Wordlist { words }
    }

    /// Build from a list of words, checking count, ordering, uniqueness and
    /// that no word holds whitespace.
    pub fn from_words(words: Vec<String>) -> Result<Self> {
        check_words(&words)?;
        Ok(Wordlist { words })
    }

    /// Parse one word per line. A trailing newline and CRLF endings are accepted.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::from_words(text.lines().map(|l| l.to_string()).collect())
    }

    /// Load a wordlist file from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading wordlist from {}", path.display());
        let text = fs::read_to_string(path)?;
        Self::from_text(&text)
    }

    /// Binary search for `word`, returning its index.
    pub fn lookup_index(&self, word: &str) -> Option<u16> {
        self.words
            .binary_search_by(|w| w.as_str().cmp(word))
            .ok()
            .map(|i| i as u16)
    }

    /// Word at `index`. Callers guarantee `index < 2048`.
    pub fn lookup_word(&self, index: u16) -> &str {
        &self.words[index as usize]
    }

    /// All words starting with `prefix`, in order.
    pub fn words_by_prefix(&self, prefix: &str) -> &[String] {
        let start = self.words.partition_point(|w| w.as_str() < prefix);
        let count = self.words[start..]
            .iter()
            .take_while(|w| w.starts_with(prefix))
            .count();
        &self.words[start..start + count]
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|w| w.as_str())
    }
}

/// Load-time contract shared by every constructor.
fn check_words(words: &[String]) -> Result<()> {
    if words.len() != WORDLIST_LEN {
        return Err(Bip39Error::InvalidWordlist(format!(
            "expected {} words, got {}",
            WORDLIST_LEN,
            words.len()
        )));
    }
    if let Some(pos) = words.iter().position(|w| w.is_empty()) {
        return Err(Bip39Error::InvalidWordlist(format!("empty word at line {}", pos + 1)));
    }
    // Mnemonics are joined and split on spaces
    if let Some(pos) = words.iter().position(|w| w.chars().any(char::is_whitespace)) {
        return Err(Bip39Error::InvalidWordlist(format!(
            "word '{}' at line {} contains whitespace",
            words[pos],
            pos + 1
        )));
    }
    // Strictly ascending also rules out duplicates
    for (i, pair) in words.windows(2).enumerate() {
        if pair[0] >= pair[1] {
            return Err(Bip39Error::InvalidWordlist(format!(
                "'{}' (line {}) is not sorted before '{}'",
                pair[0],
                i + 1,
                pair[1]
            )));
        }
    }
    Ok(())
}
