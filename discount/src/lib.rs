//! Discount selects, from a catalog of time-stamped items, the largest subset whose
//! active intervals pairwise do not overlap.
//!
//! Overview
//! - `max_non_overlapping`: one selection over all requested items.
//! - `max_non_overlapping_by_category`: an independent selection per root category.
//! - Both entry points canonicalize the requested ids (dedup + sort) first; the
//!   canonical set is the cache key and the list sent to the catalog gateway, so
//!   reordered or duplicated requests are served from the same entry.
//!
//! Key behaviors and trade-offs
//! - Selection is greedy by earliest end. Ties on end keep the gateway's order,
//!   and an interval starting exactly when the previous one ends is accepted.
//! - Items missing a timestamp abort the call with `MissingTimestamp`.
//! - Gateway failures, timeouts and interruptions propagate unchanged and are
//!   never cached.
//! - Concurrent misses on the same key are not coalesced; the last store wins.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use discount::Discount;
//! use discount_mock::InMemoryCatalog;
//!
//! let discount = Discount::builder()
//!     .with_gateway(Arc::new(InMemoryCatalog::fixtures()))
//!     .build()?;
//! assert_eq!(
//!     discount.max_non_overlapping(&["MLA2", "MLA1"]).await?,
//!     vec!["MLA1", "MLA2"],
//! );
//! ```
#![warn(missing_docs)]

pub(crate) mod core;
mod interrupt;
mod selection;

pub use core::{Discount, DiscountBuilder};
pub use interrupt::Interrupt;

pub use discount_cache::ResultCache;
pub use discount_core::{
    CacheConfig, CanonicalKey, CatalogGateway, CategoryGroup, DiscountConfig, DiscountError, Item,
    Operation,
};
