//! # Cross-System Providers
//!
//! Some tracked tokens stand for a balance kept by another integration
//! (a shop mod's wallet, for instance). The integration registers a
//! [`CrossSystemProvider`] at startup when it is installed; tokens are bound
//! to provider names independently, so a binding may point at a provider
//! that never registers. That case contributes zero.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{EconomyError, EconomyResult};
use crate::identity::ItemIdentity;

/// Capability exposed by an optional integration.
pub trait CrossSystemProvider: Send + Sync {
    /// Provider name, matched against token bindings.
    fn name(&self) -> &str;

    /// Looks up the balance for `key`.
    ///
    /// # Errors
    ///
    /// Any error is treated as a zero contribution by the caller.
    fn try_get_value(&self, key: &ItemIdentity) -> EconomyResult<u64>;
}

/// Registered providers and the tokens bound to them.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn CrossSystemProvider>>,
    bindings: HashMap<ItemIdentity, String>,
}

impl ProviderRegistry {
    /// Creates an empty registry with no bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the stock binding of `kubejs:coin` to the `sdmshop`
    /// wallet. The provider itself still has to register.
    #[must_use]
    pub fn with_default_bindings() -> Self {
        let mut registry = Self::new();
        registry.bind(ItemIdentity::from_static("kubejs:coin"), "sdmshop");
        registry
    }

    /// Binds a token to a provider name.
    pub fn bind(&mut self, identity: ItemIdentity, provider: impl Into<String>) -> &mut Self {
        self.bindings.insert(identity, provider.into());
        self
    }

    /// Registers an installed provider, replacing any with the same name.
    pub fn register(&mut self, provider: Arc<dyn CrossSystemProvider>) -> &mut Self {
        let name = provider.name().to_string();
        tracing::info!(provider = %name, "Cross-system provider registered");
        self.providers.insert(name, provider);
        self
    }

    /// Returns true if `identity` is bound to some provider.
    #[must_use]
    pub fn is_external(&self, identity: &ItemIdentity) -> bool {
        self.bindings.contains_key(identity)
    }

    /// Returns true if a provider with this name is registered.
    #[must_use]
    pub fn is_registered(&self, name: &str) -> bool {
        self.providers.contains_key(name)
    }

    /// Calls the provider bound to `identity`.
    ///
    /// # Errors
    ///
    /// - [`EconomyError::ProviderUnavailable`] if the bound provider is not registered
    /// - whatever the provider returns
    ///
    /// Returns `Ok(0)` for unbound tokens.
    pub fn try_lookup(&self, identity: &ItemIdentity) -> EconomyResult<u64> {
        let Some(name) = self.bindings.get(identity) else {
            return Ok(0);
        };
        let provider = self
            .providers
            .get(name)
            .ok_or_else(|| EconomyError::ProviderUnavailable(name.clone()))?;
        provider.try_get_value(identity)
    }

    /// Best-effort lookup: failures are logged and count as zero.
    #[must_use]
    pub fn lookup(&self, identity: &ItemIdentity) -> u64 {
        match self.try_lookup(identity) {
            Ok(value) => value,
            Err(err) => {
                tracing::debug!(identity = %identity, error = %err, "Cross-system lookup failed");
                0
            }
        }
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.providers.keys().collect::<Vec<_>>())
            .field("bindings", &self.bindings)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Wallet(u64);

    impl CrossSystemProvider for Wallet {
        fn name(&self) -> &str {
            "sdmshop"
        }

        fn try_get_value(&self, _key: &ItemIdentity) -> EconomyResult<u64> {
            Ok(self.0)
        }
    }

    struct Broken;

    impl CrossSystemProvider for Broken {
        fn name(&self) -> &str {
            "sdmshop"
        }

        fn try_get_value(&self, _key: &ItemIdentity) -> EconomyResult<u64> {
            Err(EconomyError::LookupFailed {
                provider: "sdmshop".to_string(),
                reason: "signature mismatch".to_string(),
            })
        }
    }

    fn coin() -> ItemIdentity {
        ItemIdentity::parse("kubejs:coin").unwrap()
    }

    #[test]
    fn test_absent_provider_contributes_zero() {
        let registry = ProviderRegistry::with_default_bindings();
        assert!(registry.is_external(&coin()));
        assert!(!registry.is_registered("sdmshop"));
        assert_eq!(
            registry.try_lookup(&coin()),
            Err(EconomyError::ProviderUnavailable("sdmshop".to_string()))
        );
        assert_eq!(registry.lookup(&coin()), 0);
    }

    #[test]
    fn test_registered_provider() {
        let mut registry = ProviderRegistry::with_default_bindings();
        registry.register(Arc::new(Wallet(250)));
        assert_eq!(registry.lookup(&coin()), 250);

        let diamond = ItemIdentity::parse("diamond").unwrap();
        assert!(!registry.is_external(&diamond));
        assert_eq!(registry.lookup(&diamond), 0);
    }

    #[test]
    fn test_failing_provider_contributes_zero() {
        let mut registry = ProviderRegistry::with_default_bindings();
        registry.register(Arc::new(Broken));
        assert!(registry.try_lookup(&coin()).is_err());
        assert_eq!(registry.lookup(&coin()), 0);
    }
}
