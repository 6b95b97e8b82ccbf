//! AES-256-GCM sealing of free-text notes.
//!
//! Token layout: standard base64 of `nonce(12) ‖ ciphertext ‖ tag(16)`.

use crate::crypto::keystore::{KeyStore, MasterKey};
use crate::errors::{AppError, AppResult};
use crate::models::note::EncryptedNote;
use aes_gcm::aead::Aead;
use aes_gcm::{Aes256Gcm, Key, KeyInit, Nonce};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rand::RngCore;
use rand::rngs::OsRng;
use tracing::warn;

pub const NONCE_LEN: usize = 12;
pub const TAG_LEN: usize = 16;

/// Encrypts and decrypts notes with the device key.
///
/// A cipher whose key could not be obtained is "degraded": `encrypt` and
/// `decrypt` fail, and the `*_or_*` wrappers apply the fallback policy.
pub struct NoteCipher {
    key: Option<MasterKey>,
}

impl NoteCipher {
    pub fn new(store: &dyn KeyStore, alias: &str) -> Self {
        match store.load_or_create(alias) {
            Ok(key) => Self { key: Some(key) },
            Err(e) => {
                warn!(error = %e, alias, "note key unavailable, notes will not be encrypted");
                Self { key: None }
            }
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.key.is_none()
    }

    fn aead(&self) -> AppResult<Aes256Gcm> {
        let key = self
            .key
            .as_ref()
            .ok_or_else(|| AppError::Crypto("no encryption key available".to_string()))?;
        Ok(Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.bytes())))
    }

    pub fn encrypt(&self, plaintext: &str) -> AppResult<EncryptedNote> {
        let cipher = self.aead()?;

        let mut nonce_bytes = [0u8; NONCE_LEN];
        OsRng.fill_bytes(&mut nonce_bytes);
        let nonce = Nonce::from_slice(&nonce_bytes);

        let sealed = cipher
            .encrypt(nonce, plaintext.as_bytes())
            .map_err(|e| AppError::Crypto(e.to_string()))?;

        let mut out = Vec::with_capacity(NONCE_LEN + sealed.len());
        out.extend_from_slice(&nonce_bytes);
        out.extend_from_slice(&sealed);

        Ok(EncryptedNote::from_stored(STANDARD.encode(out)))
    }

    pub fn decrypt(&self, token: &str) -> AppResult<String> {
        let cipher = self.aead()?;

        // Older tokens were line-wrapped.
        let compact: String = token.chars().filter(|c| !c.is_whitespace()).collect();
        let data = STANDARD
            .decode(compact.as_bytes())
            .map_err(|e| AppError::Crypto(format!("invalid token encoding: {e}")))?;

        if data.len() < NONCE_LEN + TAG_LEN {
            return Err(AppError::Crypto("Invalid ciphertext length".to_string()));
        }

        let (nonce_bytes, sealed) = data.split_at(NONCE_LEN);
        let plain = cipher
            .decrypt(Nonce::from_slice(nonce_bytes), sealed)
            .map_err(|_| AppError::Crypto("authentication failed".to_string()))?;

        String::from_utf8(plain).map_err(|e| AppError::Crypto(e.to_string()))
    }

    /// Encrypt, or keep the plaintext as-is when encryption fails.
    pub fn seal_or_plain(&self, plaintext: &str) -> EncryptedNote {
        match self.encrypt(plaintext) {
            Ok(token) => token,
            Err(e) => {
                warn!(error = %e, "note encryption failed, storing plaintext");
                EncryptedNote::from_stored(plaintext.to_string())
            }
        }
    }

    /// Decrypt, or yield an empty note when decryption fails.
    pub fn open_or_empty(&self, note: &EncryptedNote) -> String {
        match self.decrypt(note.as_str()) {
            Ok(plain) => plain,
            Err(e) => {
                warn!(error = %e, "note decryption failed");
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::keystore::MemoryKeyStore;

    fn cipher() -> NoteCipher {
        NoteCipher::new(&MemoryKeyStore::new(), "test_key")
    }

    #[test]
    fn encrypt_then_decrypt_yields_plaintext() {
        let c = cipher();
        let long = "x".repeat(4096);
        for text in ["", "felt good", "àèìòù ✓ 日本語", long.as_str()] {
            let token = c.encrypt(text).unwrap();
            assert_eq!(c.decrypt(token.as_str()).unwrap(), text);
        }
    }

    #[test]
    fn same_plaintext_gives_different_tokens() {
        let c = cipher();
        let a = c.encrypt("same").unwrap();
        let b = c.encrypt("same").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn token_has_nonce_and_tag() {
        let c = cipher();
        let token = c.encrypt("").unwrap();
        let raw = STANDARD.decode(token.as_str()).unwrap();
        assert_eq!(raw.len(), NONCE_LEN + TAG_LEN);
    }

    #[test]
    fn wrapped_token_is_accepted() {
        let c = cipher();
        let token = c.encrypt("a somewhat longer note to force wrapping").unwrap();
        let s = token.as_str();
        let wrapped = format!("{}\n{}\r\n", &s[..20], &s[20..]);
        assert_eq!(
            c.decrypt(&wrapped).unwrap(),
            "a somewhat longer note to force wrapping"
        );
    }

    #[test]
    fn short_or_garbage_tokens_fail() {
        let c = cipher();
        assert!(c.decrypt("").is_err());
        assert!(c.decrypt("not base64 !!").is_err());
        assert!(c.decrypt(&STANDARD.encode([0u8; 27])).is_err());
    }

    #[test]
    fn tampered_token_fails_authentication() {
        let c = cipher();
        let token = c.encrypt("secret").unwrap();
        let mut raw = STANDARD.decode(token.as_str()).unwrap();
        let last = raw.len() - 1;
        raw[last] ^= 0x01;
        assert!(c.decrypt(&STANDARD.encode(raw)).is_err());
    }

    #[test]
    fn other_key_cannot_decrypt() {
        let store = MemoryKeyStore::new();
        let a = NoteCipher::new(&store, "a");
        let b = NoteCipher::new(&store, "b");
        let token = a.encrypt("private").unwrap();
        assert!(b.decrypt(token.as_str()).is_err());
        assert_eq!(b.open_or_empty(&token), "");
    }

    #[test]
    fn degraded_cipher_falls_back() {
        struct Broken;
        impl KeyStore for Broken {
            fn load_or_create(&self, _alias: &str) -> AppResult<MasterKey> {
                Err(AppError::KeyStore("unavailable".into()))
            }
        }

        let c = NoteCipher::new(&Broken, "x");
        assert!(c.is_degraded());
        assert!(c.encrypt("hi").is_err());
        assert_eq!(c.seal_or_plain("hi").as_str(), "hi");
        assert_eq!(c.open_or_empty(&EncryptedNote::from_stored("hi".into())), "");
    }
}
