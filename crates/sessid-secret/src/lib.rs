//! Secret capabilities for sessid.
//!
//! This crate defines the two things the session codec needs from the
//! outside world, without tying the codec to any particular library:
//!
//! - **Secret service** ([`SecretService`] trait, [`SealedBytes`]):
//!   authenticated encryption over byte buffers (seal/open).
//! - **Random source** ([`RandomSource`] trait, [`OsRandom`]):
//!   cryptographically secure random bytes.
//! - **Errors** ([`SecretError`]): what can go wrong in either.
//!
//! A concrete AES-256-GCM secret service ([`AesGcmSecretService`]) ships
//! behind the `aes-gcm` feature (enabled by default), keyed by a
//! [`SecretKey`].
//!
//! # Architecture
//!
//! ```text
//! Facade (sessid)  ← issue / resolve / logout flow
//!     ↕
//! Session codecs (sessid-session)  ← SecureId, session cookie
//!     ↕
//! Secret capabilities (this crate)  ← seal/open, random bytes
//! ```

// ---------------------------------------------------------------------------
// Module declarations
// ---------------------------------------------------------------------------

#[cfg(feature = "aes-gcm")]
mod aead;
mod error;
mod key;
mod random;
mod service;

// ---------------------------------------------------------------------------
// Re-exports
// ---------------------------------------------------------------------------

#[cfg(feature = "aes-gcm")]
pub use aead::{AesGcmSecretService, NONCE_LEN};
pub use error::SecretError;
pub use key::{KEY_LEN, SecretKey};
pub use random::{OsRandom, RandomSource};
pub use service::{SealedBytes, SecretService};
