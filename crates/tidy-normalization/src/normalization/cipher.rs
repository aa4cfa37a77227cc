//! Toy column cipher.
//!
//! **Not encryption in any meaningful sense.** Each UTF-8 byte of the cell is
//! XORed with the repeating passphrase bytes and the result is hex-encoded.
//! There is no nonce, no authentication, and the passphrase is the keystream:
//! anyone holding one plaintext/ciphertext pair recovers the key. Use it to
//! keep values from being read over a shoulder, never for real secrets.
//!
//! Decrypting with the wrong passphrase does not fail. It produces garbage
//! text (invalid UTF-8 is replaced with U+FFFD), and callers have no way to
//! tell from the output alone.

use crate::types::Passphrase;

fn apply_keystream(bytes: &[u8], passphrase: &Passphrase) -> Vec<u8> {
    bytes
        .iter()
        .zip(passphrase.as_bytes().iter().cycle())
        .map(|(byte, key)| byte ^ key)
        .collect()
}

/// Encrypt a cell value to lowercase hex.
pub fn encrypt_value(value: &str, passphrase: &Passphrase) -> String {
    hex::encode(apply_keystream(value.as_bytes(), passphrase))
}

/// Decrypt a value produced by [`encrypt_value`].
///
/// Returns `None` only when the input is not valid hex. A wrong passphrase
/// still yields `Some` garbage.
pub fn decrypt_value(value: &str, passphrase: &Passphrase) -> Option<String> {
    let bytes = hex::decode(value.trim()).ok()?;
    let plain = apply_keystream(&bytes, passphrase);
    Some(String::from_utf8_lossy(&plain).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> Passphrase {
        Passphrase::new(s).unwrap()
    }

    #[test]
    fn test_known_vector() {
        // 'A' ^ 'k' = 0x41 ^ 0x6b = 0x2a
        assert_eq!(encrypt_value("A", &key("k")), "2a");
        assert_eq!(encrypt_value("", &key("k")), "");
    }

    #[test]
    fn test_round_trip() {
        let k = key("code name");
        for value in ["123-45-6789", "Zoë Ünïcödé", "with spaces and \t tabs", ""] {
            let encrypted = encrypt_value(value, &k);
            assert!(encrypted.chars().all(|c| c.is_ascii_hexdigit()));
            assert_eq!(decrypt_value(&encrypted, &k).as_deref(), Some(value));
        }
    }

    #[test]
    fn test_wrong_key_is_garbage_not_error() {
        let encrypted = encrypt_value("secret value", &key("right"));
        let decrypted = decrypt_value(&encrypted, &key("wrong")).unwrap();
        assert_ne!(decrypted, "secret value");
    }

    #[test]
    fn test_invalid_hex_is_missing() {
        assert_eq!(decrypt_value("not hex", &key("k")), None);
        assert_eq!(decrypt_value("abc", &key("k")), None);
    }
}
