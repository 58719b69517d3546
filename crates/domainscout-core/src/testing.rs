//! In-process registrar adapters for tests

use std::collections::HashMap;
use std::sync::atomic::{
    AtomicUsize,
    Ordering,
};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use domainscout_registrar_api::{
    AdapterError,
    AdapterMetadata,
    AdapterRegistry,
    AdapterResult,
    DomainName,
    RegistrarAdapter,
    RegistrarQuote,
    SettingsSchema,
};

#[derive(Clone, Copy)]
pub(crate) enum Behavior {
    Quote { available: bool, price: Option<f64> },
    Fail,
    Panic,
}

#[derive(Default)]
pub(crate) struct CallStats {
    calls: AtomicUsize,
    active: AtomicUsize,
    peak: AtomicUsize,
}

impl CallStats {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

pub(crate) struct TestAdapter {
    metadata: AdapterMetadata,
    behavior: Behavior,
    delay: Duration,
    stats: Arc<CallStats>,
}

impl TestAdapter {
    pub fn new(name: &str, behavior: Behavior) -> Self {
        Self {
            metadata: AdapterMetadata {
                name: name.to_string(),
                registrar_id: name.to_lowercase(),
                version: "0.0.0".to_string(),
                description: format!("{name} test adapter"),
                website: None,
                settings_schema: SettingsSchema::new(),
            },
            behavior,
            delay: Duration::ZERO,
            stats: Arc::new(CallStats::default()),
        }
    }

    pub fn priced(name: &str, available: bool, price: f64) -> Self {
        Self::new(
            name,
            Behavior::Quote {
                available,
                price: Some(price),
            },
        )
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn stats(&self) -> Arc<CallStats> {
        Arc::clone(&self.stats)
    }
}

#[async_trait]
impl RegistrarAdapter for TestAdapter {
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
        self.stats.calls.fetch_add(1, Ordering::SeqCst);
        let active = self.stats.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.stats.peak.fetch_max(active, Ordering::SeqCst);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.stats.active.fetch_sub(1, Ordering::SeqCst);

        match self.behavior {
            Behavior::Quote {
                available,
                price: Some(price),
            } => Ok(RegistrarQuote::priced(self.name(), available, price, "USD")),
            Behavior::Quote {
                available,
                price: None,
            } => Ok(RegistrarQuote::unpriced(self.name(), available)),
            Behavior::Fail => Err(AdapterError::NetworkError("connection reset".to_string())),
            Behavior::Panic => panic!("adapter bug"),
        }
    }
}

pub(crate) fn registry(adapters: Vec<TestAdapter>) -> Arc<AdapterRegistry> {
    let mut registry = AdapterRegistry::new();
    for adapter in adapters {
        registry.register(Box::new(adapter));
    }
    Arc::new(registry)
}
