//! Order id type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Prefix carried by every order id.
const ORDER_ID_PREFIX: &str = "MFH";

/// Errors that can occur when parsing an [`OrderId`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum OrderIdError {
    /// The input string is empty.
    #[error("order id cannot be empty")]
    Empty,
    /// The input does not start with the `MFH` prefix.
    #[error("order id must start with {ORDER_ID_PREFIX}")]
    MissingPrefix,
}

/// A globally unique order identifier.
///
/// Order ids are generated at ingestion time with the shape
/// `MFH<unix-seconds><3-digit-suffix>`, where the suffix disambiguates
/// orders ingested within the same second. Parsing only checks the
/// prefix; the tail is treated as opaque.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Parse an `OrderId` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty or lacks the `MFH` prefix.
    pub fn parse(s: &str) -> Result<Self, OrderIdError> {
        if s.is_empty() {
            return Err(OrderIdError::Empty);
        }

        let tail = s
            .strip_prefix(ORDER_ID_PREFIX)
            .ok_or(OrderIdError::MissingPrefix)?;
        if tail.is_empty() {
            return Err(OrderIdError::MissingPrefix);
        }

        Ok(Self(s.to_owned()))
    }

    /// Build an `OrderId` from an ingestion timestamp and a
    /// disambiguating suffix.
    ///
    /// The suffix is rendered as exactly three digits, matching the
    /// wire format expected by downstream consumers.
    #[must_use]
    pub fn from_parts(unix_seconds: i64, suffix: u16) -> Self {
        Self(format!("{ORDER_ID_PREFIX}{unix_seconds}{:03}", suffix % 1000))
    }

    /// Returns the order id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for OrderId {
    type Err = OrderIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_format() {
        let id = OrderId::from_parts(1_738_915_200, 7);
        assert_eq!(id.as_str(), "MFH1738915200007");
    }

    #[test]
    fn test_from_parts_wraps_suffix() {
        let id = OrderId::from_parts(1_738_915_200, 1007);
        assert_eq!(id.as_str(), "MFH1738915200007");
    }

    #[test]
    fn test_parse_valid() {
        assert!(OrderId::parse("MFH1738915200123").is_ok());
    }

    #[test]
    fn test_parse_rejects_empty_and_prefixless() {
        assert!(matches!(OrderId::parse(""), Err(OrderIdError::Empty)));
        assert!(matches!(
            OrderId::parse("ORD123"),
            Err(OrderIdError::MissingPrefix)
        ));
        assert!(matches!(
            OrderId::parse("MFH"),
            Err(OrderIdError::MissingPrefix)
        ));
    }

    #[test]
    fn test_roundtrip() {
        let id = OrderId::from_parts(1_738_915_200, 1);
        let parsed = OrderId::parse(id.as_str()).unwrap();
        assert_eq!(parsed, id);
    }
}
