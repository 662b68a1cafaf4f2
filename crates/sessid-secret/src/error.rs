//! Error types for the secret layer.
//!
//! Each crate in sessid defines its own error enum. When you see a
//! `SecretError`, the problem is in key handling, randomness, or the
//! authenticated cipher, not in how a session id or cookie was encoded.

/// Errors that can occur in the secret layer.
///
/// The cipher backends report failures as opaque values (AEAD libraries
/// deliberately say nothing about *why* a ciphertext was rejected), so
/// each variant carries a message rather than a typed source.
#[derive(Debug, thiserror::Error)]
pub enum SecretError {
    /// Sealing a plaintext failed.
    #[error("seal failed: {0}")]
    Seal(String),

    /// Opening a sealed value failed: wrong key, tampered ciphertext or
    /// nonce, or a nonce of the wrong size.
    #[error("open failed: {0}")]
    Open(String),

    /// Key material could not be parsed or has the wrong length.
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// The random source could not produce bytes.
    #[error("random source failed: {0}")]
    Random(String),
}
