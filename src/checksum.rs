use sha2::{Digest, Sha256};

use crate::binary::bytes_to_bits;

/// Checksum bits of `entropy`: the first `len(entropy) / 4` bits of its SHA-256 digest.
pub fn checksum_bits(entropy: &[u8]) -> String {
    let digest = Sha256::digest(entropy);
    let mut bits = bytes_to_bits(&digest);
    bits.truncate(entropy.len() / 4);
    bits
}
