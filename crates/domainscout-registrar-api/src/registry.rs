use std::sync::Arc;

use crate::adapter::RegistrarAdapter;

/// Adapter registry - the fixed, ordered set of registrar backends.
///
/// Built once at startup; registration order is the order quotes are
/// produced in before ranking.
pub struct AdapterRegistry {
    adapters: Vec<Arc<dyn RegistrarAdapter>>,
}

impl AdapterRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            adapters: Vec::new(),
        }
    }

    /// Register an adapter; a duplicate identifier replaces the earlier entry in place
    pub fn register(&mut self, adapter: Box<dyn RegistrarAdapter>) {
        let adapter: Arc<dyn RegistrarAdapter> = Arc::from(adapter);
        match self
            .adapters
            .iter()
            .position(|a| a.registrar_id() == adapter.registrar_id())
        {
            Some(index) => self.adapters[index] = adapter,
            None => self.adapters.push(adapter),
        }
    }

    /// All adapters in registration order
    pub fn all(&self) -> &[Arc<dyn RegistrarAdapter>] {
        &self.adapters
    }

    /// Get an adapter by registrar identifier
    pub fn get(&self, registrar_id: &str) -> Option<&Arc<dyn RegistrarAdapter>> {
        self.adapters
            .iter()
            .find(|a| a.registrar_id() == registrar_id)
    }

    /// Registrar identifiers in registration order
    pub fn registrar_ids(&self) -> Vec<String> {
        self.adapters
            .iter()
            .map(|a| a.registrar_id().to_string())
            .collect()
    }

    /// Number of adapters whose credentials are present
    pub fn enabled_count(&self) -> usize {
        self.adapters.iter().filter(|a| a.enabled()).count()
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}

impl Default for AdapterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use async_trait::async_trait;

    use super::*;
    use crate::{
        AdapterMetadata,
        AdapterResult,
        DomainName,
        RegistrarQuote,
        SettingsSchema,
    };

    struct NamedAdapter {
        metadata: AdapterMetadata,
    }

    impl NamedAdapter {
        fn boxed(id: &str, description: &str) -> Box<dyn RegistrarAdapter> {
            Box::new(Self {
                metadata: AdapterMetadata {
                    name: id.to_uppercase(),
                    registrar_id: id.to_string(),
                    version: "0.1.0".to_string(),
                    description: description.to_string(),
                    website: None,
                    settings_schema: SettingsSchema::new(),
                },
            })
        }
    }

    #[async_trait]
    impl RegistrarAdapter for NamedAdapter {
        fn metadata(&self) -> &AdapterMetadata {
            &self.metadata
        }

        fn initialize(&mut self, _settings: HashMap<String, String>) -> AdapterResult<()> {
            Ok(())
        }

        fn enabled(&self) -> bool {
            true
        }

        async fn lookup(&self, _domain: &DomainName) -> AdapterResult<RegistrarQuote> {
            Ok(RegistrarQuote::unpriced(self.name(), true))
        }
    }

    #[test]
    fn test_registry_creation() {
        let registry = AdapterRegistry::new();
        assert_eq!(registry.len(), 0);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_registry_preserves_order() {
        let mut registry = AdapterRegistry::new();
        registry.register(NamedAdapter::boxed("zeta", "first"));
        registry.register(NamedAdapter::boxed("alpha", "second"));
        registry.register(NamedAdapter::boxed("mid", "third"));

        assert_eq!(registry.registrar_ids(), vec!["zeta", "alpha", "mid"]);
        assert_eq!(registry.enabled_count(), 3);
        assert!(registry.get("alpha").is_some());
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_duplicate_registration_replaces_in_place() {
        let mut registry = AdapterRegistry::new();
        registry.register(NamedAdapter::boxed("a", "old"));
        registry.register(NamedAdapter::boxed("b", "other"));
        registry.register(NamedAdapter::boxed("a", "new"));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.registrar_ids(), vec!["a", "b"]);
        assert_eq!(registry.get("a").unwrap().metadata().description, "new");
    }
}
