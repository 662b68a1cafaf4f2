//! Walks one session through login, an authenticated request, a tampered
//! request, and logout, printing the headers exchanged at each step.
//!
//! Configuration comes from the environment:
//!
//! - `SESSID_DOMAIN`: cookie domain (default `localhost`)
//! - `SESSID_KEY`: 64 hex chars of key material (default: a fresh key)
//! - `RUST_LOG`: log filter (default `info`)

use sessid::http::header::{COOKIE, SET_COOKIE};
use sessid::http::{HeaderMap, HeaderValue};
use sessid::prelude::*;

fn main() -> Result<(), SessidError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .init();

    let config = match std::env::var("SESSID_DOMAIN") {
        Ok(domain) => SessionConfig::new(domain),
        Err(_) => SessionConfig::default(),
    };
    let key = match std::env::var("SESSID_KEY") {
        Ok(text) => SecretKey::from_hex(&text)?,
        Err(_) => {
            tracing::warn!("SESSID_KEY not set, using an ephemeral key");
            SecretKey::generate()
        }
    };
    let secret = AesGcmSecretService::new(&key);

    // --- Login ---
    let mut response = HeaderMap::new();
    let pair = sessid::issue(&mut response, &config, "alice", &secret)?;
    tracing::info!(sid = %pair.sid, "minted secure id");
    print_headers("login response", &response);

    // --- Authenticated request ---
    let request = echo_cookies(&response);
    match sessid::resolve(&request, &secret)? {
        Some(session) => {
            tracing::info!(user = %session.user, "request authenticated");
        }
        None => tracing::warn!("request carried no session"),
    }

    // --- Tampered request ---
    let tampered = tamper(&pair.sid);
    let forged = encode_cookie("alice", tampered.as_str())?;
    let mut request = HeaderMap::new();
    if let Ok(value) = HeaderValue::from_str(&format!("session={forged}")) {
        request.insert(COOKIE, value);
    }
    match sessid::resolve(&request, &secret) {
        Ok(_) => tracing::error!("tampered session was accepted"),
        Err(e) if e.is_malformed() => {
            tracing::info!(error = %e, "tampered session rejected");
        }
        Err(e) => return Err(e),
    }

    // --- Logout ---
    let mut response = HeaderMap::new();
    sessid::logout(&mut response, &config);
    print_headers("logout response", &response);

    Ok(())
}

/// Turns `Set-Cookie` headers into the `Cookie` header a browser would
/// send back (name=value only, attributes dropped).
fn echo_cookies(response: &HeaderMap) -> HeaderMap {
    let mut request = HeaderMap::new();
    for header in response.get_all(SET_COOKIE) {
        let Ok(text) = header.to_str() else { continue };
        let pair = text.split(';').next().unwrap_or_default();
        if let Ok(value) = HeaderValue::from_str(pair) {
            request.append(COOKIE, value);
        }
    }
    request
}

/// Flips the last character of the id.
fn tamper(sid: &SecureId) -> SecureId {
    let mut text = sid.as_str().to_owned();
    let last = text.pop().unwrap_or('A');
    text.push(if last == 'A' { 'B' } else { 'A' });
    SecureId::from(text)
}

fn print_headers(label: &str, headers: &HeaderMap) {
    for (name, value) in headers {
        println!("{label}: {name}: {}", value.to_str().unwrap_or("<binary>"));
    }
}
