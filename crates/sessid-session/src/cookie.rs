//! The cookie codec: `(user, secure id)` in one opaque cookie value.
//!
//! The cookie value is built in two layers:
//!
//! ```text
//! hex( json( {"user": "...", "sid": "..."} ) )
//! ```
//!
//! JSON keeps the payload field-tagged; hex keeps the cookie value inside
//! the characters every browser and proxy accepts, so quotes, commas and
//! semicolons in the payload can never collide with cookie delimiters.
//! Neither layer adds any cryptographic property. Tamper resistance comes
//! entirely from the sealed [`SecureId`] carried in the `sid` field.

use cookie::Cookie;
use http::HeaderMap;
use http::header::COOKIE;
use serde::{Deserialize, Serialize};

use crate::{CookieSink, CookieSpec, SecureId, SessionError};

/// Name of the session cookie.
pub const SESSION_COOKIE_NAME: &str = "session";

/// Path the session cookie is scoped to.
pub const SESSION_COOKIE_PATH: &str = "/";

/// The payload carried in the session cookie.
///
/// Lives only for one request or response: built to be encoded, or
/// decoded to be handed to [`decode_sid`](crate::decode_sid).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCookie {
    pub user: String,
    pub sid: String,
}

impl SessionCookie {
    /// Returns the carried session id, still unverified.
    pub fn secure_id(&self) -> SecureId {
        SecureId::from(self.sid.as_str())
    }
}

/// Encodes `(user, sid)` into a hex-only cookie value.
///
/// # Errors
/// Returns [`SessionError::CookieEncode`] if serialization fails, which
/// doesn't happen for string inputs.
pub fn encode_cookie(user: &str, sid: &str) -> Result<String, SessionError> {
    let payload = SessionCookie {
        user: user.to_owned(),
        sid: sid.to_owned(),
    };
    let json = serde_json::to_vec(&payload).map_err(SessionError::CookieEncode)?;
    Ok(hex::encode(json))
}

/// Decodes a cookie value produced by [`encode_cookie`].
///
/// # Errors
/// - [`SessionError::CookieHex`]: the value isn't valid hex
/// - [`SessionError::CookieDecode`]: the bytes aren't a session record
pub fn decode_cookie(value: &str) -> Result<SessionCookie, SessionError> {
    let json = hex::decode(value)?;
    serde_json::from_slice(&json).map_err(SessionError::CookieDecode)
}

/// Attaches the session cookie for `(user, sid)` to a response.
///
/// The cookie is named `session`, scoped to `.<domain>` and path `/`.
///
/// # Errors
/// Propagates any error from [`encode_cookie`]. Attaching itself can't fail.
pub fn set_session<K>(
    sink: &mut K,
    domain: &str,
    user: &str,
    sid: &str,
) -> Result<(), SessionError>
where
    K: CookieSink + ?Sized,
{
    let value = encode_cookie(user, sid)?;
    sink.set_cookie(session_cookie(domain, value));
    tracing::debug!(%domain, %user, "session cookie set");
    Ok(())
}

/// Overwrites the session cookie with an empty value.
///
/// Doesn't need (or look at) the previous cookie value.
pub fn clear_session<K>(sink: &mut K, domain: &str)
where
    K: CookieSink + ?Sized,
{
    sink.set_cookie(session_cookie(domain, String::new()));
    tracing::debug!(%domain, "session cookie cleared");
}

/// Finds and decodes the session cookie in a request's `Cookie` headers.
///
/// Returns `Ok(None)` when there is no `session` cookie or it has been
/// cleared (empty value). Header values that aren't visible ASCII and
/// unparsable cookie pairs are skipped.
///
/// # Errors
/// Propagates any error from [`decode_cookie`].
pub fn read_session(
    headers: &HeaderMap,
) -> Result<Option<SessionCookie>, SessionError> {
    for header in headers.get_all(COOKIE) {
        let Ok(text) = header.to_str() else {
            continue;
        };
        for cookie in Cookie::split_parse(text).flatten() {
            if cookie.name() != SESSION_COOKIE_NAME {
                continue;
            }
            if cookie.value().is_empty() {
                return Ok(None);
            }
            return decode_cookie(cookie.value()).map(Some);
        }
    }
    Ok(None)
}

fn session_cookie(domain: &str, value: String) -> CookieSpec {
    CookieSpec {
        domain: format!(".{domain}"),
        name: SESSION_COOKIE_NAME.to_owned(),
        value,
        path: SESSION_COOKIE_PATH.to_owned(),
    }
}

// =========================================================================
// Tests
// =========================================================================
