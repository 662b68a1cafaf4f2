//! Integration tests for the full login → request → logout flow.
//!
//! Each test plays both sides: the server writes `Set-Cookie` headers
//! into a response `HeaderMap`, and a tiny "browser" turns them back into
//! a request `Cookie` header.

use cookie::{Cookie, CookieJar};
use sessid::http::header::{COOKIE, SET_COOKIE};
use sessid::http::{HeaderMap, HeaderValue};
use sessid::prelude::*;

// =========================================================================
// Helpers
// =========================================================================

fn secret() -> AesGcmSecretService {
    AesGcmSecretService::new(&SecretKey::generate())
}

fn config() -> SessionConfig {
    SessionConfig::new("example.com")
}

/// Applies every `Set-Cookie` header in `response` to the browser's jar.
fn browser_receive(jar: &mut CookieJar, response: &HeaderMap) {
    for header in response.get_all(SET_COOKIE) {
        let text = header.to_str().expect("set-cookie is ascii").to_owned();
        let cookie = Cookie::parse(text).expect("server sent a valid cookie");
        jar.add(cookie);
    }
}

/// Builds the request headers a browser would send from its jar.
fn browser_request(jar: &CookieJar) -> HeaderMap {
    let pairs: Vec<String> = jar
        .iter()
        .map(|c| format!("{}={}", c.name(), c.value()))
        .collect();
    let mut headers = HeaderMap::new();
    if !pairs.is_empty() {
        headers.insert(COOKIE, HeaderValue::from_str(&pairs.join("; ")).unwrap());
    }
    headers
}

fn request_with_session_value(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        COOKIE,
        HeaderValue::from_str(&format!("session={value}")).unwrap(),
    );
    headers
}

// =========================================================================
// Happy path
// =========================================================================

#[test]
fn test_login_then_request_resolves_same_session() {
    let secret = secret();
    let mut jar = CookieJar::new();

    let mut response = HeaderMap::new();
    let pair = sessid::issue(&mut response, &config(), "alice", &secret).unwrap();
    browser_receive(&mut jar, &response);

    let session = sessid::resolve(&browser_request(&jar), &secret)
        .unwrap()
        .expect("request should carry a session");

    assert_eq!(session.user, "alice");
    assert_eq!(session.pid, pair.pid);
}

#[test]
fn test_logout_then_request_has_no_session() {
    let secret = secret();
    let mut jar = CookieJar::new();

    let mut login = HeaderMap::new();
    sessid::issue(&mut login, &config(), "alice", &secret).unwrap();
    browser_receive(&mut jar, &login);

    let mut logout = HeaderMap::new();
    sessid::logout(&mut logout, &config());
    browser_receive(&mut jar, &logout);

    assert_eq!(jar.get("session").map(|c| c.value()), Some(""));
    assert!(sessid::resolve(&browser_request(&jar), &secret).unwrap().is_none());
}

#[test]
fn test_relogin_issues_fresh_secure_id() {
    let secret = secret();

    let first = sessid::issue(&mut HeaderMap::new(), &config(), "alice", &secret).unwrap();
    let second = sessid::issue(&mut HeaderMap::new(), &config(), "alice", &secret).unwrap();

    assert_ne!(first.sid, second.sid);
    assert_ne!(first.pid, second.pid);
}

#[test]
fn test_codec_functions_compose_without_facade() {
    let secret = secret();

    let pair = encode_id("my-id", &secret).unwrap();
    let value = encode_cookie("bob", pair.sid.as_str()).unwrap();
    let cookie = decode_cookie(&value).unwrap();
    let pid = decode_sid(&cookie.secure_id(), &secret).unwrap();

    assert_eq!(cookie.user, "bob");
    assert_eq!(pid.as_str(), "my-id");
}

// =========================================================================
// Rejection
// =========================================================================

#[test]
fn test_cookie_from_other_key_is_malformed() {
    let mut response = HeaderMap::new();
    sessid::issue(&mut response, &config(), "alice", &secret()).unwrap();
    let mut jar = CookieJar::new();
    browser_receive(&mut jar, &response);

    let err = sessid::resolve(&browser_request(&jar), &secret()).unwrap_err();

    assert!(err.is_malformed(), "got {err:?}");
}

#[test]
fn test_swapped_user_keeps_sid_but_forged_sid_is_rejected() {
    let secret = secret();
    let pair = encode_id("victim-session", &secret).unwrap();

    // Rewriting the user field is possible (it isn't sealed), but the
    // resolved pid still points at the original session.
    let relabelled = encode_cookie("mallory", pair.sid.as_str()).unwrap();
    let session = sessid::resolve(&request_with_session_value(&relabelled), &secret)
        .unwrap()
        .unwrap();
    assert_eq!(session.user, "mallory");
    assert_eq!(session.pid.as_str(), "victim-session");

    // Forging the sid itself is not.
    let forged = encode_cookie("mallory", "Zm9yZ2Vk.AAAAAAAAAAAAAAAA").unwrap();
    let err = sessid::resolve(&request_with_session_value(&forged), &secret)
        .unwrap_err();
    assert!(err.is_malformed(), "got {err:?}");
}

#[test]
fn test_garbage_cookie_value_is_rejected_but_not_malformed() {
    let err = sessid::resolve(&request_with_session_value("xyz"), &secret())
        .unwrap_err();

    assert!(matches!(err, SessidError::Session(SessionError::CookieHex(_))));
    assert!(!err.is_malformed());
}

#[test]
fn test_key_loaded_from_hex_opens_sessions_from_original_key() {
    let key = SecretKey::generate();
    let issuing = AesGcmSecretService::new(&key);
    let restarted = AesGcmSecretService::new(&SecretKey::from_hex(&key.to_hex()).unwrap());

    let pair = new_id(&issuing).unwrap();

    assert_eq!(decode_sid(&pair.sid, &restarted).unwrap(), pair.pid);
}

#[test]
fn test_shared_service_across_threads() {
    use std::sync::Arc;

    let secret: Arc<dyn SecretService> = Arc::new(secret());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let secret = Arc::clone(&secret);
            std::thread::spawn(move || {
                let pair = encode_id(&format!("id-{i}"), &secret).unwrap();
                decode_sid(&pair.sid, &secret).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap().as_str(), format!("id-{i}"));
    }
}
