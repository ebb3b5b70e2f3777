//! BIP-39 mnemonics: entropy ⇄ word sequence encoding, checksum validation
//! and PBKDF2 seed derivation.
//!
//! The wordlist is explicit state. Build one with [`Wordlist::english`] or
//! [`Wordlist::load`] and pass it by reference to every codec call.

pub mod binary;
pub mod checksum;
pub mod cli;
pub mod config;
pub mod entropy;
pub mod error;
pub mod mnemonic;
pub mod seed;
pub mod wordlist;

pub use entropy::{generate_entropy, EntropyBitLen};
pub use error::{Bip39Error, Result};
pub use mnemonic::{
    Mnemonic, WordsCount, WORDS_NUM_12, WORDS_NUM_15, WORDS_NUM_18, WORDS_NUM_21, WORDS_NUM_24,
    WORD_BIT_LEN,
};
pub use seed::{derive_seed, seed_salt, SEED_LEN, SEED_PBKDF2_ROUNDS, SEED_SALT_PREFIX};
pub use wordlist::{Wordlist, WORDLIST_LEN};
