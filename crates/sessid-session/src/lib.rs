//! Session identifiers and session cookies for sessid.
//!
//! This crate handles the two halves of a stateless web session:
//!
//! 1. **Identifier codec**: minting a random session id and sealing it
//!    into a tamper-evident [`SecureId`] ([`new_id`], [`encode_id`]),
//!    then opening it again with strict validation ([`decode_sid`]).
//! 2. **Cookie codec**: carrying `(user, SecureId)` in a single opaque
//!    cookie value ([`encode_cookie`], [`decode_cookie`]) and attaching or
//!    clearing that cookie on a response ([`set_session`],
//!    [`clear_session`]).
//!
//! # How it fits in the stack
//!
//! ```text
//! Facade (above)  ← issue / resolve / logout in one call
//!     ↕
//! Session codecs (this crate)  ← SecureId format, cookie envelope
//!     ↕
//! Secret capabilities (below)  ← SecretService, RandomSource
//! ```
//!
//! Nothing here holds key material or session state. The secret service
//! is passed in on every call.

mod config;
mod cookie;
mod error;
mod id;
mod sink;

pub use config::SessionConfig;
pub use cookie::{
    SESSION_COOKIE_NAME, SESSION_COOKIE_PATH, SessionCookie, clear_session,
    decode_cookie, encode_cookie, read_session, set_session,
};
pub use error::SessionError;
pub use id::{
    IdPair, PLAIN_ID_BYTES, PlainId, SecureId, decode_sid, encode_id, new_id,
    new_id_with,
};
pub use sink::{CookieSink, CookieSpec};
