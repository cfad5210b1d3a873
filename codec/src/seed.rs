//! Seed derivation from a mnemonic and passphrase.
//!
//! Only the word count is checked. Words outside any list and bad checksums
//! are accepted, so phrases from non-standard generators still derive seeds.

use mnemo_crypto::pbkdf2_hmac_sha512;
use mnemo_types::{MnemonicError, Seed};
use zeroize::Zeroizing;

use crate::normalize::{nfkd, normalize};

/// PBKDF2 iteration count.
pub const PBKDF2_ROUNDS: u32 = 2048;

/// Prefix prepended to the passphrase to form the salt.
pub const SALT_PREFIX: &str = "mnemonic";

/// Derive the 64-byte seed.
///
/// password = NFKD(mnemonic), salt = NFKD("mnemonic" + passphrase).
pub fn mnemonic_to_seed(mnemonic: &str, passphrase: &str) -> Result<Seed, MnemonicError> {
    let normalized = normalize(mnemonic)?;
    let salt = Zeroizing::new(nfkd(&format!("{SALT_PREFIX}{passphrase}")));

    let bytes = Zeroizing::new(pbkdf2_hmac_sha512::<{ Seed::LEN }>(
        normalized.as_str().as_bytes(),
        salt.as_bytes(),
        PBKDF2_ROUNDS,
    )?);
    tracing::trace!(words = normalized.words().len(), "derived seed");
    Ok(Seed::from_bytes(*bytes))
}
