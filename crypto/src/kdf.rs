//! PBKDF2 key derivation with HMAC-SHA512.

use hmac::Hmac;
use mnemo_types::MnemonicError;
use sha2::Sha512;

type HmacSha512 = Hmac<Sha512>;

/// Derive `N` bytes from `password` and `salt` with PBKDF2-HMAC-SHA512.
///
/// `rounds` must be non-zero.
pub fn pbkdf2_hmac_sha512<const N: usize>(
    password: &[u8],
    salt: &[u8],
    rounds: u32,
) -> Result<[u8; N], MnemonicError> {
    if rounds == 0 {
        return Err(MnemonicError::Derivation("PBKDF2 rounds must be non-zero".into()));
    }
    let mut output = [0u8; N];
    pbkdf2::pbkdf2::<HmacSha512>(password, salt, rounds, &mut output)
        .map_err(|e| MnemonicError::Derivation(e.to_string()))?;
    Ok(output)
}
