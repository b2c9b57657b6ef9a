use std::hash::Hash;
use std::time::Duration;

use async_trait::async_trait;
use discount_types::CacheConfig;
use moka::future::Cache;
use moka::policy::EvictionPolicy;

/// Minimal key/value storage used by the result cache.
///
/// Implementations must be safe for concurrent use; entries are replaced on
/// `put`, never mutated in place.
#[async_trait]
pub trait CacheStore<K, V>: Send + Sync {
    /// Look up a live entry. Expired entries are misses.
    async fn get(&self, key: &K) -> Option<V>;
    /// Insert or replace an entry, restarting its time-to-live.
    async fn put(&self, key: K, value: V);
    /// Number of live entries after pending evictions have been applied.
    async fn entry_count(&self) -> u64;
}

/// Size-bounded store with least-recently-used eviction and a fixed
/// time-to-live measured from insertion.
pub struct TtlLruStore<K, V> {
    inner: Cache<K, V>,
}

impl<K, V> TtlLruStore<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    /// Create a store holding at most `capacity` entries (at least one).
    ///
    /// `ttl` is clamped to [`CacheConfig::MAX_TTL`].
    #[must_use]
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        let cap = u64::try_from(capacity.max(1)).unwrap_or(u64::MAX);
        let inner = Cache::builder()
            .max_capacity(cap)
            .time_to_live(ttl.min(CacheConfig::MAX_TTL))
            .eviction_policy(EvictionPolicy::lru())
            .build();
        Self { inner }
    }
}

#[async_trait]
impl<K, V> CacheStore<K, V> for TtlLruStore<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    async fn get(&self, key: &K) -> Option<V> {
        self.inner.get(key).await
    }

    async fn put(&self, key: K, value: V) {
        self.inner.insert(key, value).await;
    }

    async fn entry_count(&self) -> u64 {
        self.inner.run_pending_tasks().await;
        self.inner.entry_count()
    }
}
