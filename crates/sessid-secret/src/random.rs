//! Random byte sources.

use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::SecretError;

/// Produces cryptographically secure random bytes.
///
/// Only used when minting new session ids. Kept behind a trait so tests
/// can supply fixed bytes and exercise the failure path.
pub trait RandomSource: Send + Sync {
    /// Returns `n` random bytes.
    ///
    /// # Errors
    /// Returns [`SecretError::Random`] if the source is unavailable.
    fn bytes(&self, n: usize) -> Result<Vec<u8>, SecretError>;
}

/// [`RandomSource`] backed by the operating system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn bytes(&self, n: usize) -> Result<Vec<u8>, SecretError> {
        let mut buf = vec![0u8; n];
        OsRng
            .try_fill_bytes(&mut buf)
            .map_err(|e| SecretError::Random(e.to_string()))?;
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_random_returns_requested_length() {
        let bytes = OsRandom.bytes(32).expect("os rng should work");
        assert_eq!(bytes.len(), 32);
    }

    #[test]
    fn test_os_random_zero_length_is_empty() {
        let bytes = OsRandom.bytes(0).expect("os rng should work");
        assert!(bytes.is_empty());
    }

    #[test]
    fn test_os_random_successive_calls_differ() {
        // 2^-256 chance of a false failure.
        let a = OsRandom.bytes(32).unwrap();
        let b = OsRandom.bytes(32).unwrap();
        assert_ne!(a, b);
    }
}
