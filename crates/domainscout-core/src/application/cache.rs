use std::sync::{
    Arc,
    Weak,
};
use std::time::Duration;

use dashmap::DashMap;
use domainscout_registrar_api::{
    DomainName,
    RegistrarQuote,
};
use tokio::task::JoinHandle;
use tokio::time::{
    interval,
    Instant,
    MissedTickBehavior,
};

pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(60);

const MIN_SWEEP_PERIOD: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    registrar_id: String,
    domain: DomainName,
}

impl CacheKey {
    fn new(registrar_id: &str, domain: &DomainName) -> Self {
        Self {
            registrar_id: registrar_id.to_string(),
            domain: domain.clone(),
        }
    }
}

struct CacheEntry {
    quote: RegistrarQuote,
    expires_at: Instant,
}

impl CacheEntry {
    fn is_expired(&self, now: Instant) -> bool {
        now > self.expires_at
    }
}

/// Per-(registrar, domain) quote cache with TTL expiry on read
pub struct ResultCache {
    entries: DashMap<CacheKey, CacheEntry>,
    default_ttl: Duration,
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_TTL)
    }
}

impl ResultCache {
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            default_ttl,
        }
    }

    pub fn get(&self, registrar_id: &str, domain: &DomainName) -> Option<RegistrarQuote> {
        let key = CacheKey::new(registrar_id, domain);
        let now = Instant::now();

        {
            let entry = self.entries.get(&key)?;
            if !entry.is_expired(now) {
                return Some(entry.quote.clone());
            }
        }

        // A concurrent writer may have refreshed the entry since the read
        self.entries.remove_if(&key, |_, entry| entry.is_expired(now));
        None
    }

    /// Stores a quote; `None` uses the default TTL. Last writer wins.
    pub fn set(
        &self, registrar_id: &str, domain: &DomainName, quote: RegistrarQuote,
        ttl: Option<Duration>,
    ) {
        let expires_at = Instant::now() + ttl.unwrap_or(self.default_ttl);
        self.entries.insert(
            CacheKey::new(registrar_id, domain),
            CacheEntry { quote, expires_at },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Removes every entry, returning how many were dropped
    pub fn clear(&self) -> usize {
        let mut cleared = 0;
        self.entries.retain(|_, _| {
            cleared += 1;
            false
        });
        cleared
    }

    /// Periodically drops expired entries that are never read again.
    ///
    /// The task holds a weak reference and exits once the cache is dropped.
    pub fn spawn_sweeper(self: &Arc<Self>, period: Duration) -> JoinHandle<()> {
        let cache: Weak<Self> = Arc::downgrade(self);
        let period = period.max(MIN_SWEEP_PERIOD);

        tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;

                let Some(cache) = cache.upgrade() else {
                    break;
                };

                let purged = cache.purge_expired();
                if purged > 0 {
                    tracing::debug!(purged, remaining = cache.len(), "Swept expired cache entries");
                }
            }
        })
    }

    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut purged = 0;
        self.entries.retain(|_, entry| {
            let expired = entry.is_expired(now);
            if expired {
                purged += 1;
            }
            !expired
        });
        purged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domain(name: &str) -> DomainName {
        DomainName::parse(name).unwrap()
    }

    fn quote(registrar: &str, price: f64) -> RegistrarQuote {
        RegistrarQuote::priced(registrar, true, price, "USD")
    }

    #[tokio::test(start_paused = true)]
    async fn test_get_returns_fresh_entry() {
        let cache = ResultCache::default();
        let d = domain("example.com");

        cache.set("porkbun", &d, quote("Porkbun", 9.73), None);

        assert_eq!(cache.get("porkbun", &d), Some(quote("Porkbun", 9.73)));
        assert_eq!(cache.get("godaddy", &d), None);
        assert_eq!(cache.get("porkbun", &domain("other.com")), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_expires_strictly_after_ttl() {
        let cache = ResultCache::new(Duration::from_secs(60));
        let d = domain("example.com");
        cache.set("namecheap", &d, quote("Namecheap", 12.98), None);

        tokio::time::advance(Duration::from_secs(60)).await;
        assert!(cache.get("namecheap", &d).is_some());

        tokio::time::advance(Duration::from_millis(1)).await;
        assert!(cache.get("namecheap", &d).is_none());
        assert!(cache.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_explicit_ttl_overrides_default() {
        let cache = ResultCache::new(Duration::from_secs(60));
        let d = domain("example.com");
        cache.set("porkbun", &d, quote("Porkbun", 9.73), Some(Duration::from_secs(5)));

        tokio::time::advance(Duration::from_secs(6)).await;
        assert!(cache.get("porkbun", &d).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_last_writer_wins_and_refreshes_expiry() {
        let cache = ResultCache::new(Duration::from_secs(10));
        let d = domain("example.com");

        cache.set("godaddy", &d, quote("GoDaddy", 14.99), None);
        tokio::time::advance(Duration::from_secs(8)).await;
        cache.set("godaddy", &d, quote("GoDaddy", 11.99), None);
        tokio::time::advance(Duration::from_secs(8)).await;

        assert_eq!(cache.get("godaddy", &d), Some(quote("GoDaddy", 11.99)));
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_purge_and_clear() {
        let cache = ResultCache::new(Duration::from_secs(10));
        let d = domain("example.com");

        cache.set("a", &d, quote("A", 1.0), Some(Duration::from_secs(1)));
        cache.set("b", &d, quote("B", 2.0), None);
        cache.set("c", &d, quote("C", 3.0), None);

        tokio::time::advance(Duration::from_secs(2)).await;
        assert_eq!(cache.purge_expired(), 1);
        assert_eq!(cache.len(), 2);

        assert_eq!(cache.clear(), 2);
        assert!(cache.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweeper_reclaims_unread_entries() {
        let cache = Arc::new(ResultCache::new(Duration::from_secs(1)));
        let sweeper = cache.spawn_sweeper(Duration::from_secs(1));

        for round in 0..3 {
            for i in 0..100 {
                let d = domain(&format!("round{round}-site{i}.com"));
                cache.set("porkbun", &d, quote("Porkbun", 9.73), None);
            }
            assert_eq!(cache.len(), 100);

            tokio::time::sleep(Duration::from_secs(10)).await;
            assert!(cache.is_empty());
        }

        sweeper.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweeper_keeps_fresh_entries_and_stops_with_cache() {
        let cache = Arc::new(ResultCache::new(Duration::from_secs(60)));
        let sweeper = cache.spawn_sweeper(Duration::from_secs(1));
        cache.set("porkbun", &domain("example.com"), quote("Porkbun", 9.73), None);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(cache.len(), 1);

        drop(cache);
        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(sweeper.is_finished());
    }

    #[tokio::test]
    async fn test_concurrent_expired_reads_are_safe() {
        let cache = Arc::new(ResultCache::new(Duration::ZERO));
        let d = domain("example.com");
        cache.set("a", &d, quote("A", 1.0), None);
        tokio::time::sleep(Duration::from_millis(5)).await;

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let d = d.clone();
                tokio::spawn(async move { cache.get("a", &d) })
            })
            .collect();

        for handle in handles {
            assert!(handle.await.unwrap().is_none());
        }
        assert!(cache.is_empty());
    }
}
