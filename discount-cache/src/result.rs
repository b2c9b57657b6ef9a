use std::future::Future;
use std::sync::Arc;

use discount_core::{CanonicalKey, CategoryGroup, DiscountError, Operation};
use discount_types::CacheConfig;

use crate::store::{CacheStore, TtlLruStore};

type Store<V> = Arc<dyn CacheStore<CanonicalKey, Arc<V>>>;

/// Memoizes the two selection operations, one namespace each.
///
/// A namespace is `None` when its TTL is configured as zero; calls then always
/// compute. Concurrent misses on the same key are not coalesced: each caller
/// computes and the last `put` wins, which is harmless because equal keys
/// produce equal results.
pub struct ResultCache {
    cfg: CacheConfig,
    select: Option<Store<Vec<String>>>,
    select_by_category: Option<Store<Vec<CategoryGroup>>>,
}

impl ResultCache {
    fn maybe_store<V>(cfg: &CacheConfig, op: Operation) -> Option<Store<V>>
    where
        V: Send + Sync + 'static,
    {
        let ttl = cfg.ttl_for(op)?;
        let capacity = cfg.capacity_for(op);
        let store: Store<V> = Arc::new(TtlLruStore::new(capacity, ttl));
        Some(store)
    }

    /// Build the per-operation stores described by `cfg`.
    #[must_use]
    pub fn new(cfg: &CacheConfig) -> Self {
        Self {
            cfg: cfg.clone(),
            select: Self::maybe_store(cfg, Operation::Select),
            select_by_category: Self::maybe_store(cfg, Operation::SelectByCategory),
        }
    }

    /// Return the cached global selection for `key`, or run `compute` and
    /// store its result on success.
    ///
    /// # Errors
    /// Propagates the error of `compute` unchanged; nothing is stored.
    pub async fn selection<F, Fut>(
        &self,
        key: &CanonicalKey,
        compute: F,
    ) -> Result<Vec<String>, DiscountError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<String>, DiscountError>>,
    {
        memoize(self.select.as_ref(), Operation::Select, key, compute).await
    }

    /// Return the cached per-category selection for `key`, or run `compute` and
    /// store its result on success.
    ///
    /// # Errors
    /// Propagates the error of `compute` unchanged; nothing is stored.
    pub async fn selection_by_category<F, Fut>(
        &self,
        key: &CanonicalKey,
        compute: F,
    ) -> Result<Vec<CategoryGroup>, DiscountError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<CategoryGroup>, DiscountError>>,
    {
        memoize(
            self.select_by_category.as_ref(),
            Operation::SelectByCategory,
            key,
            compute,
        )
        .await
    }

    /// Live entries in an operation's namespace; zero when it is disabled or
    /// the operation is not memoized.
    pub async fn entry_count(&self, op: Operation) -> u64 {
        match op {
            Operation::Select => match &self.select {
                Some(store) => store.entry_count().await,
                None => 0,
            },
            Operation::SelectByCategory => match &self.select_by_category {
                Some(store) => store.entry_count().await,
                None => 0,
            },
            _ => 0,
        }
    }

    /// Effective policy snapshot for introspection/logging.
    #[must_use]
    pub fn config_json(&self) -> serde_json::Value {
        let describe = |op: Operation| {
            serde_json::json!({
                "enabled": self.cfg.ttl_for(op).is_some(),
                "ttl_ms": self
                    .cfg
                    .ttl_for(op)
                    .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX)),
                "max_entries": self.cfg.capacity_for(op),
            })
        };
        let mut out = serde_json::Map::new();
        for op in Operation::CACHED {
            out.insert(op.as_str().to_string(), describe(op));
        }
        serde_json::Value::Object(out)
    }
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
async fn memoize<V, F, Fut>(
    store: Option<&Store<V>>,
    op: Operation,
    key: &CanonicalKey,
    compute: F,
) -> Result<V, DiscountError>
where
    V: Clone + Send + Sync + 'static,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<V, DiscountError>>,
{
    let Some(store) = store else {
        return compute().await;
    };
    if let Some(hit) = store.get(key).await {
        #[cfg(feature = "tracing")]
        tracing::debug!(operation = %op, key = %key, "result cache hit");
        return Ok((*hit).clone());
    }
    #[cfg(feature = "tracing")]
    tracing::debug!(operation = %op, key = %key, "result cache miss");

    let value = compute().await?;
    store.put(key.clone(), Arc::new(value.clone())).await;
    Ok(value)
}
