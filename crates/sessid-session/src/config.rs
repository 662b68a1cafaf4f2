//! Session cookie configuration.

use serde::{Deserialize, Serialize};

/// Configuration for issuing session cookies.
///
/// Holds no key material; the secret service is configured separately
/// and passed to each call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Fully qualified domain name of the service, without a leading dot.
    /// The session cookie is scoped to `.<domain>`.
    ///
    /// Default: `localhost`.
    pub domain: String,
}

impl SessionConfig {
    /// Creates a config for `domain`.
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            domain: "localhost".to_owned(),
        }
    }
}
