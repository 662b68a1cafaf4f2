//! Key material for the bundled secret service.

use std::fmt;

use rand::Rng;

use crate::SecretError;

/// Length of a [`SecretKey`] in bytes (256 bits).
pub const KEY_LEN: usize = 32;

/// A 256-bit symmetric key.
///
/// Keys are usually generated once with [`SecretKey::generate`], stored in
/// configuration as hex ([`SecretKey::to_hex`]), and loaded at startup with
/// [`SecretKey::from_hex`]. The `Debug` impl never prints the bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey([u8; KEY_LEN]);

impl SecretKey {
    /// Generates a fresh random key.
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        Self(rng.random())
    }

    /// Builds a key from raw bytes.
    ///
    /// # Errors
    /// Returns [`SecretError::InvalidKey`] unless `bytes` is exactly
    /// [`KEY_LEN`] long.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SecretError> {
        let key: [u8; KEY_LEN] = bytes.try_into().map_err(|_| {
            SecretError::InvalidKey(format!(
                "expected {KEY_LEN} bytes, got {}",
                bytes.len()
            ))
        })?;
        Ok(Self(key))
    }

    /// Parses a key from its hex form (64 hex characters).
    ///
    /// # Errors
    /// Returns [`SecretError::InvalidKey`] on bad hex or a wrong length.
    pub fn from_hex(text: &str) -> Result<Self, SecretError> {
        let bytes = hex::decode(text.trim())
            .map_err(|e| SecretError::InvalidKey(e.to_string()))?;
        Self::from_bytes(&bytes)
    }

    /// Returns the key as lowercase hex, suitable for configuration files.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Returns the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(..)")
    }
}
