//! Where session cookies go: the HTTP response sink.
//!
//! sessid doesn't own an HTTP stack. Instead it defines the
//! [`CookieSink`] trait: a single method that accepts a [`CookieSpec`].
//! Implementations are provided for:
//!
//! - [`cookie::CookieJar`]: a later cookie with the same name replaces
//!   the earlier one, like a browser's cookie store.
//! - [`http::HeaderMap`]: appends a `Set-Cookie` header, for handing
//!   straight to any `http`-based server.
//! - `Vec<CookieSpec>`: records every cookie, handy in tests.

use cookie::{Cookie, CookieJar};
use http::header::SET_COOKIE;
use http::{HeaderMap, HeaderValue};

/// A cookie to attach to an outgoing response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieSpec {
    /// Cookie domain, including the leading `.` for subdomain scope.
    pub domain: String,
    pub name: String,
    pub value: String,
    pub path: String,
}

impl CookieSpec {
    /// Renders this spec as a [`Cookie`].
    pub fn to_cookie(&self) -> Cookie<'static> {
        Cookie::from(self.clone())
    }
}

impl From<CookieSpec> for Cookie<'static> {
    fn from(spec: CookieSpec) -> Self {
        Cookie::build((spec.name, spec.value))
            .domain(spec.domain)
            .path(spec.path)
            .build()
    }
}

/// Accepts cookies for an outgoing HTTP response.
///
/// Attaching is assumed not to fail. A sink that can't represent a cookie
/// drops it and logs a warning.
pub trait CookieSink {
    /// Attaches `cookie` to the response.
    fn set_cookie(&mut self, cookie: CookieSpec);
}

impl CookieSink for CookieJar {
    fn set_cookie(&mut self, cookie: CookieSpec) {
        self.add(cookie);
    }
}

impl CookieSink for HeaderMap {
    fn set_cookie(&mut self, cookie: CookieSpec) {
        let rendered = cookie.to_cookie().to_string();
        match HeaderValue::from_str(&rendered) {
            Ok(value) => {
                self.append(SET_COOKIE, value);
            }
            Err(e) => {
                tracing::warn!(
                    name = %cookie.name,
                    error = %e,
                    "cookie is not a valid header value, dropped"
                );
            }
        }
    }
}

impl CookieSink for Vec<CookieSpec> {
    fn set_cookie(&mut self, cookie: CookieSpec) {
        self.push(cookie);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(value: &str) -> CookieSpec {
        CookieSpec {
            domain: ".example.com".into(),
            name: "session".into(),
            value: value.into(),
            path: "/".into(),
        }
    }

    #[test]
    fn test_to_cookie_carries_all_fields() {
        let cookie = spec("abc").to_cookie();

        assert_eq!(cookie.name(), "session");
        assert_eq!(cookie.value(), "abc");
        assert_eq!(cookie.path(), Some("/"));
        // Newer `cookie` releases strip the leading dot on read.
        assert_eq!(
            cookie.domain().map(|d| d.trim_start_matches('.')),
            Some("example.com")
        );
    }

    #[test]
    fn test_cookie_jar_later_cookie_replaces_earlier() {
        let mut jar = CookieJar::new();

        jar.set_cookie(spec("first"));
        jar.set_cookie(spec("second"));

        assert_eq!(jar.iter().count(), 1);
        assert_eq!(jar.get("session").map(|c| c.value()), Some("second"));
    }

    #[test]
    fn test_header_map_appends_set_cookie_headers() {
        let mut headers = HeaderMap::new();

        headers.set_cookie(spec("abc"));
        headers.set_cookie(spec(""));

        let values: Vec<_> = headers
            .get_all(SET_COOKIE)
            .iter()
            .map(|v| v.to_str().unwrap().to_owned())
            .collect();
        assert_eq!(values.len(), 2);
        assert!(values[0].starts_with("session=abc"), "got {}", values[0]);
        assert!(values[0].contains("Path=/"));
        assert!(values[0].contains("example.com"));
        assert!(values[1].starts_with("session=;"), "got {}", values[1]);
    }

    #[test]
    fn test_header_map_drops_unrepresentable_cookie() {
        let mut headers = HeaderMap::new();

        headers.set_cookie(spec("bad\nvalue"));

        assert!(headers.get(SET_COOKIE).is_none());
    }

    #[test]
    fn test_vec_records_in_order() {
        let mut sink: Vec<CookieSpec> = Vec::new();

        sink.set_cookie(spec("a"));
        sink.set_cookie(spec("b"));

        assert_eq!(sink, vec![spec("a"), spec("b")]);
    }
}
