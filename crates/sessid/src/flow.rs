//! The session flow: issue at login, resolve per request, clear at logout.
//!
//! ```text
//! issue()    new_id → set_session           → Set-Cookie: session=...
//! resolve()  read_session → decode_sid      ← Cookie: session=...
//! logout()   clear_session                  → Set-Cookie: session=
//! ```
//!
//! These are thin compositions of the codec operations in
//! [`sessid_session`]. Key material is always passed in; nothing here is
//! global.

use http::HeaderMap;
use sessid_secret::SecretService;
use sessid_session::{
    CookieSink, IdPair, PlainId, SessionConfig, clear_session, decode_sid,
    new_id, read_session, set_session,
};

use crate::SessidError;

/// A session recovered from a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSession {
    /// The user named in the cookie.
    ///
    /// Only the session id is sealed. Check that the session stored under
    /// `pid` belongs to this user before trusting it.
    pub user: String,

    /// The verified plain session id, for server-side lookup.
    pub pid: PlainId,
}

/// Mints a new session for `user` and attaches its cookie to `sink`.
///
/// Returns both forms of the id; store the session under `pid`.
///
/// # Errors
/// Fails if the random source, the secret service, or cookie encoding
/// fails.
pub fn issue<K, S>(
    sink: &mut K,
    config: &SessionConfig,
    user: &str,
    secret: &S,
) -> Result<IdPair, SessidError>
where
    K: CookieSink + ?Sized,
    S: SecretService + ?Sized,
{
    let pair = new_id(secret)?;
    set_session(sink, &config.domain, user, pair.sid.as_str())?;
    tracing::info!(%user, domain = %config.domain, "session issued");
    Ok(pair)
}

/// Recovers the session carried by a request's `Cookie` headers.
///
/// Returns `Ok(None)` if the request carries no session cookie, or an
/// empty one.
///
/// # Errors
/// - [`SessionError::Malformed`](sessid_session::SessionError::Malformed)
///  : the sealed id is invalid or tampered with
/// - a cookie decode error: the cookie value itself is garbage
///
/// Either way the request must be treated as unauthenticated.
pub fn resolve<S>(
    headers: &HeaderMap,
    secret: &S,
) -> Result<Option<ResolvedSession>, SessidError>
where
    S: SecretService + ?Sized,
{
    let Some(cookie) = read_session(headers)? else {
        return Ok(None);
    };
    let pid = decode_sid(&cookie.secure_id(), secret)?;
    Ok(Some(ResolvedSession {
        user: cookie.user,
        pid,
    }))
}

/// Clears the session cookie.
pub fn logout<K>(sink: &mut K, config: &SessionConfig)
where
    K: CookieSink + ?Sized,
{
    clear_session(sink, &config.domain);
    tracing::info!(domain = %config.domain, "session cleared");
}
