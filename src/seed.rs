//! BIP-39 seed derivation (PBKDF2-HMAC-SHA512).

use hmac::Hmac;
use pbkdf2::pbkdf2;
use sha2::Sha512;

use crate::error::Result;
use crate::mnemonic::Mnemonic;
use crate::wordlist::Wordlist;

pub const SEED_SALT_PREFIX: &str = "mnemonic";
pub const SEED_PBKDF2_ROUNDS: u32 = 2048;
pub const SEED_LEN: usize = 64;

/// Salt for seed derivation: `"mnemonic"` followed by the passphrase bytes.
pub fn seed_salt(passphrase: &str) -> Vec<u8> {
    let mut salt = Vec::with_capacity(SEED_SALT_PREFIX.len() + passphrase.len());
    salt.extend_from_slice(SEED_SALT_PREFIX.as_bytes());
    salt.extend_from_slice(passphrase.as_bytes());
    salt
}

/// Derive the 64-byte seed of a mnemonic.
///
/// The mnemonic must validate against `wordlist`; its exact text (no
/// normalization) is the PBKDF2 password.
pub fn derive_seed(
    mnemonic: &Mnemonic,
    passphrase: &str,
    wordlist: &Wordlist,
) -> Result<[u8; SEED_LEN]> {
    mnemonic.validate(wordlist)?;

    let mut seed = [0u8; SEED_LEN];
    pbkdf2::<Hmac<Sha512>>(
        mnemonic.as_str().as_bytes(),
        &seed_salt(passphrase),
        SEED_PBKDF2_ROUNDS,
        &mut seed,
    );
    Ok(seed)
}
