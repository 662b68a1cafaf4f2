//! Unified error type for sessid.

use sessid_secret::SecretError;
use sessid_session::SessionError;

/// Top-level error that wraps all crate-specific errors.
///
/// When using the `sessid` facade you deal with this single error type.
/// The `#[from]` attributes let `?` convert sub-crate errors.
#[derive(Debug, thiserror::Error)]
pub enum SessidError {
    /// Key handling, randomness, or cipher failure.
    #[error(transparent)]
    Secret(#[from] SecretError),

    /// Session id or cookie failure.
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl SessidError {
    /// Returns `true` if the request carried a malformed or tampered
    /// session. Treat it exactly like "not logged in".
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Session(e) if e.is_malformed())
    }
}
