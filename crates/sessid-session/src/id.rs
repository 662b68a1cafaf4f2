//! The identifier codec: plain session ids and their sealed form.
//!
//! A session id lives in two shapes:
//!
//! - [`PlainId`]: the server-side lookup key. Hex text of 32 random
//!   bytes when minted by [`new_id`]. Never sent to the client on its own.
//! - [`SecureId`]: the client-visible form, produced by sealing the plain
//!   id with a [`SecretService`]:
//!
//! ```text
//! base64url(ciphertext) "." base64url(nonce)
//! ```
//!
//! Both segments use the URL-safe alphabet with `=` padding, which never
//! contains `.`, so the separator is unambiguous.
//!
//! # Opening is strict
//!
//! [`decode_sid`] fails closed on anything irregular: a missing or extra
//! separator, a segment that isn't canonical base64, or a sealed value the
//! secret service refuses to open. All of those surface as the same
//! [`SessionError::Malformed`] so a client can't tell which check it
//! tripped.

use std::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE;
use serde::{Deserialize, Serialize};
use sessid_secret::{OsRandom, RandomSource, SealedBytes, SecretService};

use crate::SessionError;

/// Number of random bytes behind a freshly minted [`PlainId`].
pub const PLAIN_ID_BYTES: usize = 32;

const SEPARATOR: char = '.';

// ---------------------------------------------------------------------------
// SecureId / PlainId
// ---------------------------------------------------------------------------

/// A sealed, client-visible session id: `<ciphertext>.<nonce>`.
///
/// Values of this type are untrusted until [`decode_sid`] has opened them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecureId(String);

impl SecureId {
    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the underlying `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for SecureId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SecureId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl AsRef<str> for SecureId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SecureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A plain session id, used as the server-side lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlainId(String);

impl PlainId {
    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the underlying `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for PlainId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for PlainId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl AsRef<str> for PlainId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Both forms of one session id, as produced at login.
///
/// `sid` goes to the client, `pid` stays on the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdPair {
    pub sid: SecureId,
    pub pid: PlainId,
}

// ---------------------------------------------------------------------------
// Codec operations
// ---------------------------------------------------------------------------

/// Mints a new random session id and seals it.
///
/// Draws [`PLAIN_ID_BYTES`] bytes from the operating system CSPRNG. Use
/// [`new_id_with`] to supply a different [`RandomSource`].
///
/// # Errors
/// Returns [`SessionError::Secret`] if the random source or the secret
/// service fails.
pub fn new_id<S>(secret: &S) -> Result<IdPair, SessionError>
where
    S: SecretService + ?Sized,
{
    new_id_with(&OsRandom, secret)
}

/// Mints a new session id from `rng` and seals it with `secret`.
///
/// The plain id is the lowercase hex of [`PLAIN_ID_BYTES`] random bytes.
///
/// # Errors
/// Returns [`SessionError::Secret`] if `rng` or `secret` fails.
pub fn new_id_with<R, S>(rng: &R, secret: &S) -> Result<IdPair, SessionError>
where
    R: RandomSource + ?Sized,
    S: SecretService + ?Sized,
{
    let bytes = rng.bytes(PLAIN_ID_BYTES)?;
    encode_id(&hex::encode(bytes), secret)
}

/// Seals a caller-chosen plain id.
///
/// This is the step [`new_id`] delegates to. Calling it directly is
/// useful when the plain id must be deterministic, e.g. in tests.
///
/// # Errors
/// Returns [`SessionError::Secret`] if sealing fails.
pub fn encode_id<S>(plain_text: &str, secret: &S) -> Result<IdPair, SessionError>
where
    S: SecretService + ?Sized,
{
    let sealed = secret.seal(plain_text.as_bytes())?;

    let sid = format!(
        "{}{SEPARATOR}{}",
        URL_SAFE.encode(&sealed.ciphertext),
        URL_SAFE.encode(&sealed.nonce),
    );

    Ok(IdPair {
        sid: SecureId(sid),
        pid: PlainId(plain_text.to_owned()),
    })
}

/// Opens a secure id and returns the plain id inside it.
///
/// # Errors
/// Returns [`SessionError::Malformed`] if the id doesn't contain exactly
/// one separator, either segment isn't valid base64url, the secret
/// service rejects the sealed value, or the plaintext isn't UTF-8.
pub fn decode_sid<S>(sid: &SecureId, secret: &S) -> Result<PlainId, SessionError>
where
    S: SecretService + ?Sized,
{
    let malformed = |msg: String| SessionError::Malformed {
        sid: sid.clone(),
        msg,
    };

    let mut parts = sid.as_str().split(SEPARATOR);
    let (Some(ctext), Some(nonce), None) =
        (parts.next(), parts.next(), parts.next())
    else {
        return Err(malformed("invalid format, missing separator".into()));
    };

    let ciphertext =
        URL_SAFE.decode(ctext).map_err(|e| malformed(e.to_string()))?;
    let nonce = URL_SAFE.decode(nonce).map_err(|e| malformed(e.to_string()))?;

    let plain = secret
        .open(&SealedBytes { ciphertext, nonce })
        .map_err(|e| malformed(e.to_string()))?;

    String::from_utf8(plain)
        .map(PlainId)
        .map_err(|e| malformed(e.to_string()))
}

// =========================================================================
// Tests
// =========================================================================
