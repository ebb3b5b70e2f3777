//! Entropy lengths and secure generation.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::{Bip39Error, Result};

/// The five entropy sizes a mnemonic can encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntropyBitLen {
    Bits128,
    Bits160,
    Bits192,
    Bits224,
    Bits256,
}

impl EntropyBitLen {
    pub fn from_bits(bits: usize) -> Result<Self> {
        match bits {
            128 => Ok(EntropyBitLen::Bits128),
            160 => Ok(EntropyBitLen::Bits160),
            192 => Ok(EntropyBitLen::Bits192),
            224 => Ok(EntropyBitLen::Bits224),
            256 => Ok(EntropyBitLen::Bits256),
            _ => Err(Bip39Error::InvalidEntropyLength { bits }),
        }
    }

    pub fn from_byte_len(len: usize) -> Result<Self> {
        Self::from_bits(len * 8)
    }

    pub fn bits(self) -> usize {
        match self {
            EntropyBitLen::Bits128 => 128,
            EntropyBitLen::Bits160 => 160,
            EntropyBitLen::Bits192 => 192,
            EntropyBitLen::Bits224 => 224,
            EntropyBitLen::Bits256 => 256,
        }
    }

    pub fn byte_len(self) -> usize {
        self.bits() / 8
    }

    pub fn checksum_bits(self) -> usize {
        self.bits() / 32
    }
}

/// Fill `bit_len / 8` bytes from the operating system's CSPRNG.
pub fn generate_entropy(bit_len: usize) -> Result<Vec<u8>> {
    let len = EntropyBitLen::from_bits(bit_len)?;
    let mut entropy = vec![0u8; len.byte_len()];
    OsRng.fill_bytes(&mut entropy);
    Ok(entropy)
}
