//! # Item Identity
//!
//! `namespace:path` tokens naming an item, and the registry contract used to
//! resolve them. A token without a namespace gets the default one.

use std::collections::HashSet;
use std::fmt;

use almanac_shared::constants::DEFAULT_NAMESPACE;
use serde::{Deserialize, Serialize};

use crate::error::{EconomyError, EconomyResult};

/// A validated `namespace:path` token.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemIdentity(String);

impl ItemIdentity {
    /// Parses a token.
    ///
    /// # Errors
    ///
    /// Returns [`EconomyError::InvalidIdentity`] if either part is empty or
    /// holds a character outside the resource alphabet.
    pub fn parse(token: &str) -> EconomyResult<Self> {
        let token = token.trim();
        let (namespace, path) = token.split_once(':').unwrap_or((DEFAULT_NAMESPACE, token));

        let namespace_ok = !namespace.is_empty()
            && namespace.bytes().all(is_namespace_byte);
        let path_ok = !path.is_empty() && path.bytes().all(|b| is_namespace_byte(b) || b == b'/');

        if namespace_ok && path_ok {
            Ok(Self(format!("{namespace}:{path}")))
        } else {
            Err(EconomyError::InvalidIdentity(token.to_string()))
        }
    }

    /// Wraps a token already known to be well-formed.
    pub(crate) fn from_static(token: &'static str) -> Self {
        debug_assert!(Self::parse(token).is_ok(), "malformed builtin token {token}");
        Self(token.to_string())
    }

    /// Full token.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Namespace part.
    #[must_use]
    pub fn namespace(&self) -> &str {
        self.0.split_once(':').map_or("", |(ns, _)| ns)
    }

    /// Path part.
    #[must_use]
    pub fn path(&self) -> &str {
        self.0.split_once(':').map_or("", |(_, path)| path)
    }
}

const fn is_namespace_byte(b: u8) -> bool {
    matches!(b, b'a'..=b'z' | b'0'..=b'9' | b'_' | b'-' | b'.')
}

impl TryFrom<String> for ItemIdentity {
    type Error = EconomyError;

    fn try_from(value: String) -> EconomyResult<Self> {
        Self::parse(&value)
    }
}

impl From<ItemIdentity> for String {
    fn from(value: ItemIdentity) -> Self {
        value.0
    }
}

impl fmt::Display for ItemIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Host item registry.
pub trait ItemRegistry {
    /// Returns true if the host knows this item.
    fn contains(&self, identity: &ItemIdentity) -> bool;

    /// Parses and looks up a token.
    ///
    /// # Errors
    ///
    /// Returns [`EconomyError::InvalidIdentity`] for malformed tokens and
    /// [`EconomyError::UnresolvedIdentity`] for unknown items.
    fn resolve(&self, token: &str) -> EconomyResult<ItemIdentity> {
        let identity = ItemIdentity::parse(token)?;
        if self.contains(&identity) {
            Ok(identity)
        } else {
            Err(EconomyError::UnresolvedIdentity(identity.to_string()))
        }
    }
}

/// Registry backed by a fixed set of identities.
#[derive(Debug, Clone, Default)]
pub struct StaticItemRegistry {
    items: HashSet<ItemIdentity>,
}

impl StaticItemRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a token; malformed tokens are skipped with a warning.
    pub fn register(&mut self, token: &str) -> &mut Self {
        match ItemIdentity::parse(token) {
            Ok(identity) => {
                self.items.insert(identity);
            }
            Err(e) => tracing::warn!("Skipping registry entry: {}", e),
        }
        self
    }

    /// Builds a registry from tokens.
    #[must_use]
    pub fn with_items<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Self {
        let mut registry = Self::new();
        for token in tokens {
            registry.register(token);
        }
        registry
    }

    /// Number of registered items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ItemRegistry for StaticItemRegistry {
    fn contains(&self, identity: &ItemIdentity) -> bool {
        self.items.contains(identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_tokens() {
        let id = ItemIdentity::parse("minecraft:diamond").unwrap();
        assert_eq!(id.namespace(), "minecraft");
        assert_eq!(id.path(), "diamond");

        let bare = ItemIdentity::parse("  emerald ").unwrap();
        assert_eq!(bare.as_str(), "minecraft:emerald");

        assert!(ItemIdentity::parse("my_mod:coins/gold.v2").is_ok());
    }

    #[test]
    fn test_parse_rejects_bad_tokens() {
        for token in ["", ":", "mod:", ":path", "Mod:Caps", "a:b:c", "mod:sp ace", "a/b:c"] {
            assert!(
                matches!(ItemIdentity::parse(token), Err(EconomyError::InvalidIdentity(_))),
                "{token:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_registry_resolution() {
        let registry = StaticItemRegistry::with_items(["minecraft:diamond", "NOT VALID"]);
        assert_eq!(registry.len(), 1);

        assert!(registry.resolve("diamond").is_ok());
        assert_eq!(
            registry.resolve("minecraft:dirt"),
            Err(EconomyError::UnresolvedIdentity("minecraft:dirt".to_string()))
        );
        assert!(matches!(registry.resolve("bad token"), Err(EconomyError::InvalidIdentity(_))));
    }
}
