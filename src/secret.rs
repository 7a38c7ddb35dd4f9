//! Reversible obfuscation of webhook endpoint URLs
//!
//! Endpoint URLs are secrets (anyone holding one can post into the
//! receiving automation), so they are never persisted in the clear. This is
//! deliberately a reversible cipher rather than a hash: the plaintext URL
//! must be recoverable at dispatch time.

use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit, block_padding::Pkcs7};
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// IV used when the site's nonce secret is shorter than 16 bytes
const FALLBACK_IV: [u8; 16] = *b"AtK$C&7@2q6=*fuJ";

/// Symmetric codec for stored endpoint URLs (AES-256-CBC + base64)
///
/// Keyed from two site-wide secrets supplied by the host. When no key
/// material is configured the codec degrades to plain base64: obscured but
/// not encrypted, and never fatal.
#[derive(Debug, Clone)]
pub struct SecretCodec {
    key: Option<[u8; 32]>,
    iv: [u8; 16],
}

impl SecretCodec {
    /// Create a codec keyed from the site's auth secret and nonce secret
    ///
    /// The key is the auth secret truncated or zero-padded to 32 bytes.
    /// The IV is the first 16 bytes of the nonce secret, or a fixed
    /// built-in value if the nonce secret is too short.
    pub fn new(key_secret: &str, iv_secret: &str) -> Self {
        let mut key = [0u8; 32];
        let bytes = key_secret.as_bytes();
        let len = bytes.len().min(32);
        key[..len].copy_from_slice(&bytes[..len]);

        let iv_bytes = iv_secret.as_bytes();
        let iv = if iv_bytes.len() >= 16 {
            let mut iv = [0u8; 16];
            iv.copy_from_slice(&iv_bytes[..16]);
            iv
        } else {
            FALLBACK_IV
        };

        Self { key: Some(key), iv }
    }

    /// Create a codec with no key material (degraded base64-only mode)
    pub fn unkeyed() -> Self {
        Self {
            key: None,
            iv: FALLBACK_IV,
        }
    }

    /// Whether a cipher key is configured
    pub fn is_keyed(&self) -> bool {
        self.key.is_some()
    }

    /// Encode a plaintext URL into its stored form
    pub fn encode(&self, plaintext: &str) -> String {
        match self.key {
            Some(key) => {
                let cipher = Aes256CbcEnc::new(&key.into(), &self.iv.into());
                let ciphertext = cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());
                BASE64.encode(ciphertext)
            }
            None => BASE64.encode(plaintext),
        }
    }

    /// Recover the plaintext URL from its stored form
    ///
    /// Returns the empty string if the token is not valid base64, does not
    /// decipher cleanly, or is not UTF-8 — never garbage to the caller.
    pub fn decode(&self, token: &str) -> String {
        let Ok(data) = BASE64.decode(token) else {
            return String::new();
        };

        match self.key {
            Some(key) => {
                let cipher = Aes256CbcDec::new(&key.into(), &self.iv.into());
                match cipher.decrypt_padded_vec_mut::<Pkcs7>(&data) {
                    Ok(plaintext) => String::from_utf8(plaintext).unwrap_or_default(),
                    Err(_) => String::new(),
                }
            }
            None => String::from_utf8(data).unwrap_or_default(),
        }
    }
}
