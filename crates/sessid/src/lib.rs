//! # sessid
//!
//! Stateless, tamper-evident session identifiers for web services.
//!
//! sessid mints a random session id, seals it with an authenticated
//! cipher, and carries the sealed form to the client in a `session`
//! cookie. On the way back it opens the sealed id again and rejects
//! anything that was altered. The server keeps no per-session state to
//! do this; only the key.
//!
//! ## Quick Start
//!
//! ```rust
//! use sessid::prelude::*;
//! use sessid::http::HeaderMap;
//!
//! let secret = AesGcmSecretService::new(&SecretKey::generate());
//! let config = SessionConfig::new("example.com");
//!
//! // Login: mint a session and attach the cookie to the response.
//! let mut response = HeaderMap::new();
//! let pair = sessid::issue(&mut response, &config, "alice", &secret)?;
//!
//! // Logout: overwrite the cookie with an empty value.
//! sessid::logout(&mut response, &config);
//! # let _ = pair;
//! # Ok::<(), SessidError>(())
//! ```
//!
//! ## Crates
//!
//! - [`sessid_secret`]: secret service and random source capabilities
//! - [`sessid_session`]: identifier codec and cookie codec

mod error;
mod flow;

pub use error::SessidError;
pub use flow::{ResolvedSession, issue, logout, resolve};

pub use http;
pub use sessid_secret as secret;
pub use sessid_session as session;

pub mod prelude {
    //! Everything needed for the usual issue / resolve / logout flow.

    pub use sessid_secret::{
        AesGcmSecretService, OsRandom, RandomSource, SealedBytes, SecretError,
        SecretKey, SecretService,
    };
    pub use sessid_session::{
        CookieSink, CookieSpec, IdPair, PlainId, SecureId, SessionConfig,
        SessionCookie, SessionError, clear_session, decode_cookie, decode_sid,
        encode_cookie, encode_id, new_id, new_id_with, read_session,
        set_session,
    };

    pub use crate::{ResolvedSession, SessidError};
}
