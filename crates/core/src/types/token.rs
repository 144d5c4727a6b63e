//! Opaque session token type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// An opaque bearer token identifying a session.
///
/// Tokens are unstructured strings issued once per account and presented
/// on subsequent requests instead of credentials. The `Debug`
/// implementation redacts the value so tokens never reach log output.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wrap an existing token string.
    #[must_use]
    pub const fn new(token: String) -> Self {
        Self(token)
    }

    /// Returns the token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `SessionToken` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(\"[REDACTED]\")")
    }
}

impl From<String> for SessionToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for SessionToken {
    fn from(token: &str) -> Self {
        Self(token.to_owned())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_value() {
        let token = SessionToken::from("super-secret-token");
        let debug_output = format!("{token:?}");
        assert!(!debug_output.contains("super-secret-token"));
        assert!(debug_output.contains("REDACTED"));
    }

    #[test]
    fn test_serde_transparent() {
        let token = SessionToken::from("abc123");
        assert_eq!(serde_json::to_string(&token).unwrap(), "\"abc123\"");
    }
}
