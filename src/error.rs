use thiserror::Error;

#[derive(Error, Debug)]
pub enum Bip39Error {
    #[error("invalid entropy length: {bits} bits (expected 128, 160, 192, 224 or 256)")]
    InvalidEntropyLength { bits: usize },
    #[error("invalid words count: {0} (expected 12, 15, 18, 21 or 24)")]
    InvalidWordsCount(usize),
    #[error("invalid word '{word}' at position {position}")]
    InvalidWord { word: String, position: usize },
    #[error("checksum mismatch")]
    ChecksumMismatch,
    #[error("invalid binary string: {0}")]
    BinaryStringInvalid(String),
    #[error("invalid wordlist: {0}")]
    InvalidWordlist(String),
    #[error("invalid hex: {0}")]
    InvalidHex(String),
    #[error("config error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<hex::FromHexError> for Bip39Error {
    fn from(e: hex::FromHexError) -> Self {
        Bip39Error::InvalidHex(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Bip39Error>;
