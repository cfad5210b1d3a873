//! Mnemonic checksum bits.

use crate::bits::bytes_to_bits;

/// First CS = ENT / 32 bits of SHA-256(entropy), as a bit string.
pub fn derive_checksum_bits(entropy: &[u8]) -> String {
    let ent = entropy.len() * 8;
    let cs = ent / 32;
    let hash = mnemo_crypto::sha256(entropy);
    let mut bits = bytes_to_bits(&hash);
    bits.truncate(cs);
    bits
}
