//! Mnemonic encoding, decoding and validation.
//!
//! Encoding packs `entropy || checksum` into 11-bit groups and maps each group
//! to a word. Decoding reverses that and checks the embedded checksum.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::binary::{bits_to_bytes, bytes_to_bits};
use crate::checksum::checksum_bits;
use crate::entropy::{generate_entropy, EntropyBitLen};
use crate::error::{Bip39Error, Result};
use crate::seed::{derive_seed, SEED_LEN};
use crate::wordlist::Wordlist;

pub const WORDS_NUM_12: usize = 12;
pub const WORDS_NUM_15: usize = 15;
pub const WORDS_NUM_18: usize = 18;
pub const WORDS_NUM_21: usize = 21;
pub const WORDS_NUM_24: usize = 24;

/// Bits encoded by each word.
pub const WORD_BIT_LEN: usize = 11;

/// Permitted mnemonic lengths, each paired with one entropy size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordsCount {
    Words12,
    Words15,
    Words18,
    Words21,
    Words24,
}

impl WordsCount {
    pub fn from_count(count: usize) -> Result<Self> {
        match count {
            WORDS_NUM_12 => Ok(WordsCount::Words12),
            WORDS_NUM_15 => Ok(WordsCount::Words15),
            WORDS_NUM_18 => Ok(WordsCount::Words18),
            WORDS_NUM_21 => Ok(WordsCount::Words21),
            WORDS_NUM_24 => Ok(WordsCount::Words24),
            _ => Err(Bip39Error::InvalidWordsCount(count)),
        }
    }

    pub fn count(self) -> usize {
        match self {
            WordsCount::Words12 => WORDS_NUM_12,
            WordsCount::Words15 => WORDS_NUM_15,
            WordsCount::Words18 => WORDS_NUM_18,
            WordsCount::Words21 => WORDS_NUM_21,
            WordsCount::Words24 => WORDS_NUM_24,
        }
    }

    /// Entropy carried by this many words: `words * 11 - words / 3`.
    pub fn entropy_bit_len(self) -> EntropyBitLen {
        match self {
            WordsCount::Words12 => EntropyBitLen::Bits128,
            WordsCount::Words15 => EntropyBitLen::Bits160,
            WordsCount::Words18 => EntropyBitLen::Bits192,
            WordsCount::Words21 => EntropyBitLen::Bits224,
            WordsCount::Words24 => EntropyBitLen::Bits256,
        }
    }
}

/// A mnemonic phrase. Holds raw text; validity is checked on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mnemonic {
    words: String,
}

impl Mnemonic {
    /// Generate a mnemonic of `count` words from fresh OS entropy.
    pub fn from_words_count(count: usize, wordlist: &Wordlist) -> Result<Self> {
        let words_count = WordsCount::from_count(count)?;
        let entropy = generate_entropy(words_count.entropy_bit_len().bits())?;
        Self::from_entropy(&entropy, wordlist)
    }

    /// Encode entropy of 16, 20, 24, 28 or 32 bytes.
    pub fn from_entropy(entropy: &[u8], wordlist: &Wordlist) -> Result<Self> {
        if let Err(e) = EntropyBitLen::from_byte_len(entropy.len()) {
            debug!("Mnemonic encode rejected: {}", e);
            return Err(e);
        }

        let mut bits = bytes_to_bits(entropy);
        bits.push_str(&checksum_bits(entropy));

        let words: Vec<&str> = bits
            .as_bytes()
            .chunks(WORD_BIT_LEN)
            .map(|group| wordlist.lookup_word(group_index(group)))
            .collect();

        Ok(Mnemonic {
            words: words.join(" "),
        })
    }

    /// Wrap text without validating it.
    pub fn from_text(text: &str) -> Self {
        Mnemonic {
            words: text.to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.words
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.split(' ')
    }

    pub fn word_count(&self) -> usize {
        self.words().count()
    }

    /// Recover the entropy, checking word count, word membership and checksum.
    pub fn to_entropy(&self, wordlist: &Wordlist) -> Result<Vec<u8>> {
        self.decode(wordlist).inspect_err(|e| {
            debug!("Mnemonic decode rejected: {}", failure_reason(e));
        })
    }

    fn decode(&self, wordlist: &Wordlist) -> Result<Vec<u8>> {
        let (entropy_bits, embedded_checksum) = self.split_bits(wordlist)?;

        let entropy = bits_to_bytes(&entropy_bits)?;
        if checksum_bits(&entropy) != embedded_checksum {
            return Err(Bip39Error::ChecksumMismatch);
        }
        Ok(entropy)
    }

    pub fn validate(&self, wordlist: &Wordlist) -> Result<()> {
        self.to_entropy(wordlist).map(|_| ())
    }

    pub fn is_valid(&self, wordlist: &Wordlist) -> bool {
        self.validate(wordlist).is_ok()
    }

    /// Derive the 64-byte seed, protected by `passphrase` (may be empty).
    pub fn generate_seed(
        &self,
        passphrase: &str,
        wordlist: &Wordlist,
    ) -> Result<[u8; SEED_LEN]> {
        derive_seed(self, passphrase, wordlist)
    }

    /// Rebuild the packed bit stream and split it into entropy and checksum parts.
    fn split_bits(&self, wordlist: &Wordlist) -> Result<(String, String)> {
        let words: Vec<&str> = self.words().collect();
        WordsCount::from_count(words.len())?;

        let mut bits = String::with_capacity(words.len() * WORD_BIT_LEN);
        for (position, word) in words.iter().enumerate() {
            let index = wordlist.lookup_index(word).ok_or_else(|| Bip39Error::InvalidWord {
                word: word.to_string(),
                position,
            })?;
            bits.push_str(&format!("{:011b}", index));
        }

        // entropy:checksum is 32:1, so the checksum is 1/33 of the stream
        let checksum_len = bits.len() / 33;
        let checksum = bits.split_off(bits.len() - checksum_len);
        Ok((bits, checksum))
    }
}

/// Loggable description of a decode failure. Never includes the words themselves.
fn failure_reason(e: &Bip39Error) -> String {
    match e {
        Bip39Error::InvalidWord { position, .. } => {
            format!("unknown word at position {}", position)
        }
        other => other.to_string(),
    }
}

/// Read an 11-character group of `'0'`/`'1'` bytes as an unsigned index.
fn group_index(group: &[u8]) -> u16 {
    group
        .iter()
        .fold(0u16, |acc, &bit| (acc << 1) | u16::from(bit == b'1'))
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.words)
    }
}

impl FromStr for Mnemonic {
    type Err = Bip39Error;

    /// Same as `from_text`; never fails.
    fn from_str(s: &str) -> Result<Self> {
        Ok(Mnemonic::from_text(s))
    }
}
