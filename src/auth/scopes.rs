//! OAuth scope handling for the Etsy API.
//!
//! Etsy scopes have the form `<resource>_<access>` where access is `r`
//! (read), `w` (write) or `d` (delete), e.g. `listings_r` or `shops_w`.
//! The authorization URL carries them space-separated.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// A set of Etsy OAuth scopes.
///
/// Parsed from a space- or comma-separated list; duplicates collapse.
///
/// # Example
///
/// ```rust
/// use etsy_api::AuthScopes;
///
/// let scopes: AuthScopes = "listings_r listings_w,shops_r".parse().unwrap();
/// assert!(scopes.contains("listings_w"));
/// assert_eq!(scopes.to_string(), "listings_r listings_w shops_r");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AuthScopes {
    scopes: BTreeSet<String>,
}

impl AuthScopes {
    /// Creates an empty scope set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no scopes are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// Returns `true` if `scope` is present.
    #[must_use]
    pub fn contains(&self, scope: &str) -> bool {
        self.scopes.contains(scope)
    }

    /// Returns `true` if every scope in `other` is also in `self`.
    #[must_use]
    pub fn covers(&self, other: &Self) -> bool {
        other.scopes.is_subset(&self.scopes)
    }

    /// Iterates the scopes in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.scopes.iter().map(String::as_str)
    }

    fn validate(scope: &str) -> Result<(), ConfigError> {
        let well_formed = scope
            .rsplit_once('_')
            .is_some_and(|(resource, access)| {
                !resource.is_empty()
                    && resource.chars().all(|c| c.is_ascii_lowercase() || c == '_')
                    && matches!(access, "r" | "w" | "d")
            });
        if well_formed {
            Ok(())
        } else {
            Err(ConfigError::InvalidScopes {
                reason: format!("'{scope}' is not of the form <resource>_<r|w|d>"),
            })
        }
    }
}

impl FromStr for AuthScopes {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut scopes = BTreeSet::new();
        for scope in s.split(|c: char| c == ',' || c.is_whitespace()) {
            if scope.is_empty() {
                continue;
            }
            Self::validate(scope)?;
            scopes.insert(scope.to_string());
        }
        Ok(Self { scopes })
    }
}

impl TryFrom<Vec<String>> for AuthScopes {
    type Error = ConfigError;

    fn try_from(scopes: Vec<String>) -> Result<Self, Self::Error> {
        scopes.join(" ").parse()
    }
}

impl fmt::Display for AuthScopes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scopes: Vec<&str> = self.iter().collect();
        f.write_str(&scopes.join(" "))
    }
}

impl Serialize for AuthScopes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for AuthScopes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_space_and_comma_separated() {
        let scopes: AuthScopes = "listings_r, shops_w transactions_r".parse().unwrap();
        assert!(scopes.contains("listings_r"));
        assert!(scopes.contains("shops_w"));
        assert!(scopes.contains("transactions_r"));
        assert_eq!(scopes.iter().count(), 3);
    }

    #[test]
    fn test_rejects_malformed_scope() {
        let result: Result<AuthScopes, _> = "listings_x".parse();
        assert!(matches!(result, Err(ConfigError::InvalidScopes { .. })));
        assert!("read-products".parse::<AuthScopes>().is_err());
    }

    #[test]
    fn test_covers() {
        let granted: AuthScopes = "listings_r listings_w".parse().unwrap();
        let needed: AuthScopes = "listings_w".parse().unwrap();
        assert!(granted.covers(&needed));
        assert!(!needed.covers(&granted));
    }

    #[test]
    fn test_display_is_sorted_and_space_separated() {
        let scopes: AuthScopes = "shops_r,email_r".parse().unwrap();
        assert_eq!(scopes.to_string(), "email_r shops_r");
        assert_eq!(AuthScopes::new().to_string(), "");
    }

    #[test]
    fn test_try_from_vec() {
        let scopes =
            AuthScopes::try_from(vec!["profile_r".to_string(), "address_w".to_string()]).unwrap();
        assert!(scopes.contains("address_w"));
    }

    #[test]
    fn test_serde_round_trip() {
        let scopes: AuthScopes = "listings_d listings_r".parse().unwrap();
        let json = serde_json::to_string(&scopes).unwrap();
        assert_eq!(json, r#""listings_d listings_r""#);
        let back: AuthScopes = serde_json::from_str(&json).unwrap();
        assert_eq!(back, scopes);
    }
}
