//! Configuration types shared across the orchestrator and the result cache.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{DiscountError, Operation};

/// Size and expiry policy of the result cache.
///
/// Every memoized operation owns its own namespace. Per-operation overrides are
/// keyed by [`Operation::as_str`]; a TTL of zero disables caching for that
/// operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Time-to-live from insertion applied when no per-operation override exists.
    pub default_ttl_ms: u64,
    /// Entry bound per namespace applied when no per-operation override exists.
    pub default_max_entries: usize,
    /// Per-operation TTL overrides in milliseconds.
    pub per_operation_ttl_ms: HashMap<String, u64>,
    /// Per-operation entry bound overrides.
    pub per_operation_max_entries: HashMap<String, usize>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_ttl_ms: 15 * 60 * 1000,
            default_max_entries: 5_000,
            per_operation_ttl_ms: HashMap::new(),
            per_operation_max_entries: HashMap::new(),
        }
    }
}

impl CacheConfig {
    /// Longest time-to-live the backing store accepts (1000 years).
    pub const MAX_TTL: Duration = Duration::from_secs(1000 * 365 * 24 * 60 * 60);

    /// Check that every memoized operation has a usable TTL.
    ///
    /// # Errors
    /// Returns `InvalidArg` naming the operation whose TTL exceeds [`Self::MAX_TTL`].
    pub fn validate(&self) -> Result<(), DiscountError> {
        for op in Operation::CACHED {
            if self.ttl_for(op).is_some_and(|ttl| ttl > Self::MAX_TTL) {
                return Err(DiscountError::InvalidArg(format!(
                    "cache ttl for {op} exceeds {} days",
                    Self::MAX_TTL.as_secs() / 86_400
                )));
            }
        }
        Ok(())
    }

    /// Effective TTL for an operation; `None` when caching is disabled for it.
    #[must_use]
    pub fn ttl_for(&self, op: Operation) -> Option<Duration> {
        let ms = self
            .per_operation_ttl_ms
            .get(op.as_str())
            .copied()
            .unwrap_or(self.default_ttl_ms);
        (ms > 0).then(|| Duration::from_millis(ms))
    }

    /// Effective entry bound for an operation (never zero).
    #[must_use]
    pub fn capacity_for(&self, op: Operation) -> usize {
        self.per_operation_max_entries
            .get(op.as_str())
            .copied()
            .unwrap_or(self.default_max_entries)
            .max(1)
    }

    /// Override the TTL of a single operation.
    #[must_use]
    pub fn with_ttl(mut self, op: Operation, ttl: Duration) -> Self {
        let ms = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX);
        self.per_operation_ttl_ms.insert(op.as_str().to_string(), ms);
        self
    }

    /// Override the entry bound of a single operation.
    #[must_use]
    pub fn with_max_entries(mut self, op: Operation, max_entries: usize) -> Self {
        self.per_operation_max_entries
            .insert(op.as_str().to_string(), max_entries);
        self
    }
}

/// Global configuration for the `Discount` orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountConfig {
    /// Timeout applied to every individual catalog gateway call.
    pub gateway_timeout: Duration,
    /// Optional deadline for a whole selection request (all gateway calls plus
    /// the selection itself).
    pub request_timeout: Option<Duration>,
}

impl Default for DiscountConfig {
    fn default() -> Self {
        Self {
            gateway_timeout: Duration::from_secs(5),
            request_timeout: None,
        }
    }
}
