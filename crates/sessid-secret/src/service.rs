//! The secret service capability: authenticated encryption over bytes.
//!
//! The session codec doesn't care HOW values are sealed: it just needs
//! something that implements the [`SecretService`] trait. Any AEAD
//! primitive can sit behind it: the bundled
//! [`AesGcmSecretService`](crate::AesGcmSecretService), an HSM-backed
//! service, or a test double.

use std::sync::Arc;

use crate::SecretError;

/// A sealed value: ciphertext plus the nonce it was sealed with.
///
/// The codec treats both fields as opaque bytes. Only the secret service
/// that produced them knows their sizes or structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealedBytes {
    /// Encrypted and authenticated payload (for AEAD ciphers this
    /// includes the authentication tag).
    pub ciphertext: Vec<u8>,

    /// The per-seal nonce. Fresh for every call to
    /// [`SecretService::seal`].
    pub nonce: Vec<u8>,
}

/// Seals and opens byte buffers with a key the caller never sees.
///
/// ## Contract
///
/// - `seal` draws a fresh nonce on every call, so sealing the same
///   plaintext twice yields different ciphertexts.
/// - `open` must fail (never succeed with different output) for any
///   input that `seal` didn't produce under the same key.
///
/// ## Trait bounds
///
/// - `Send + Sync` → one service is shared read-only across every
///   request handler, possibly on different threads at once.
pub trait SecretService: Send + Sync {
    /// Encrypts and authenticates `plaintext`.
    ///
    /// # Errors
    /// Returns [`SecretError::Seal`] if the cipher fails.
    fn seal(&self, plaintext: &[u8]) -> Result<SealedBytes, SecretError>;

    /// Verifies and decrypts a sealed value.
    ///
    /// # Errors
    /// Returns [`SecretError::Open`] if authentication fails or the
    /// sealed value is structurally invalid for this cipher.
    fn open(&self, sealed: &SealedBytes) -> Result<Vec<u8>, SecretError>;
}

impl<T: SecretService + ?Sized> SecretService for &T {
    fn seal(&self, plaintext: &[u8]) -> Result<SealedBytes, SecretError> {
        (**self).seal(plaintext)
    }

    fn open(&self, sealed: &SealedBytes) -> Result<Vec<u8>, SecretError> {
        (**self).open(sealed)
    }
}

impl<T: SecretService + ?Sized> SecretService for Arc<T> {
    fn seal(&self, plaintext: &[u8]) -> Result<SealedBytes, SecretError> {
        (**self).seal(plaintext)
    }

    fn open(&self, sealed: &SealedBytes) -> Result<Vec<u8>, SecretError> {
        (**self).open(sealed)
    }
}
