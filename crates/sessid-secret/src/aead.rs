//! AES-256-GCM secret service.

use std::fmt;

use aes_gcm::aead::{Aead, AeadCore, KeyInit, OsRng};
use aes_gcm::{Aes256Gcm, Key, Nonce};

use crate::{SealedBytes, SecretError, SecretKey, SecretService};

/// Nonce size used by [`AesGcmSecretService`] (96 bits).
pub const NONCE_LEN: usize = 12;

/// A [`SecretService`] sealing with AES-256-GCM and a random 96-bit nonce
/// per call.
///
/// The cipher is keyed once at construction and is safe to share across
/// threads (wrap it in an `Arc` or hand out `&` references).
///
/// ## Example
///
/// ```rust
/// use sessid_secret::{AesGcmSecretService, SecretKey, SecretService};
///
/// let secret = AesGcmSecretService::new(&SecretKey::generate());
///
/// let sealed = secret.seal(b"hello").unwrap();
/// assert_eq!(secret.open(&sealed).unwrap(), b"hello");
/// ```
#[derive(Clone)]
pub struct AesGcmSecretService {
    cipher: Aes256Gcm,
}

impl AesGcmSecretService {
    /// Creates a service keyed with `key`.
    pub fn new(key: &SecretKey) -> Self {
        let cipher =
            Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_bytes()));
        tracing::debug!("aes-256-gcm secret service initialised");
        Self { cipher }
    }
}

impl SecretService for AesGcmSecretService {
    fn seal(&self, plaintext: &[u8]) -> Result<SealedBytes, SecretError> {
        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
        let ciphertext = self
            .cipher
            .encrypt(&nonce, plaintext)
            .map_err(|e| SecretError::Seal(e.to_string()))?;

        Ok(SealedBytes {
            ciphertext,
            nonce: nonce.to_vec(),
        })
    }

    fn open(&self, sealed: &SealedBytes) -> Result<Vec<u8>, SecretError> {
        // `Nonce::from_slice` panics on a length mismatch, and the nonce
        // comes straight from an untrusted client.
        if sealed.nonce.len() != NONCE_LEN {
            return Err(SecretError::Open(format!(
                "nonce must be {NONCE_LEN} bytes, got {}",
                sealed.nonce.len()
            )));
        }
        let nonce = Nonce::from_slice(&sealed.nonce);

        self.cipher
            .decrypt(nonce, sealed.ciphertext.as_slice())
            .map_err(|e| SecretError::Open(e.to_string()))
    }
}

impl fmt::Debug for AesGcmSecretService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AesGcmSecretService").finish_non_exhaustive()
    }
}
