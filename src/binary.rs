//! Canonical binary-digit strings: one `'0'`/`'1'` per bit, MSB first, byte-major.

use crate::error::{Bip39Error, Result};

/// Render bytes as a bit string, 8 characters per byte.
pub fn bytes_to_bits(bytes: &[u8]) -> String {
    let mut bits = String::with_capacity(bytes.len() * 8);
    for b in bytes {
        bits.push_str(&format!("{:08b}", b));
    }
    bits
}

/// Pack a bit string back into bytes.
///
/// Fails with `BinaryStringInvalid` when the length is not a multiple of 8 or
/// the string holds anything besides `0` and `1`.
pub fn bits_to_bytes(bits: &str) -> Result<Vec<u8>> {
    if bits.len() % 8 != 0 {
        return Err(Bip39Error::BinaryStringInvalid(format!(
            "length {} is not a multiple of 8",
            bits.len()
        )));
    }

    let raw = bits.as_bytes();
    let mut bytes = Vec::with_capacity(raw.len() / 8);
    for chunk in raw.chunks(8) {
        let mut value = 0u8;
        for &c in chunk {
            value = (value << 1)
                | match c {
                    b'0' => 0,
                    b'1' => 1,
                    other => {
                        return Err(Bip39Error::BinaryStringInvalid(format!(
                            "unexpected character '{}'",
                            other as char
                        )))
                    }
                };
        }
        bytes.push(value);
    }
    Ok(bytes)
}
