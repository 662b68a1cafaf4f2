//! Error types for the session layer.

use sessid_secret::SecretError;

use crate::SecureId;

/// Errors that can occur while minting, opening, or carrying a session.
///
/// There are two kinds of failure, and they are kept apart on purpose:
///
/// - [`SessionError::Malformed`]: the client sent a secure id we can't
///   trust. Bad format, bad base64, and failed authentication all land
///   here with no further distinction at the type level; callers treat
///   it exactly like "no session".
/// - Everything else: a collaborator (random source, cipher, JSON, hex)
///   failed, and its error is passed through unchanged.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The secure session id is invalid or has been tampered with.
    ///
    /// `sid` is the untrusted value exactly as received; `msg` keeps the
    /// underlying cause for logging.
    #[error("malformed session: {msg}")]
    Malformed { sid: SecureId, msg: String },

    /// The random source or the secret service failed while minting.
    #[error(transparent)]
    Secret(#[from] SecretError),

    /// The cookie payload could not be serialized.
    #[error("cookie encode failed: {0}")]
    CookieEncode(serde_json::Error),

    /// The cookie payload is not a valid session record.
    #[error("cookie decode failed: {0}")]
    CookieDecode(serde_json::Error),

    /// The cookie value is not valid hex.
    #[error("cookie hex decode failed: {0}")]
    CookieHex(#[from] hex::FromHexError),
}

impl SessionError {
    /// Returns `true` for the malformed-session kind.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }
}
