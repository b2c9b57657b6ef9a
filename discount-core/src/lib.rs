//! discount-core
//!
//! Core types, traits, and algorithms shared across the discount workspace.
//!
//! - `interval`: the canonical per-item interval derived from catalog records.
//! - `select`: greedy maximum non-overlapping selection.
//! - `partition`: per-root-category selection.
//! - `key`: canonical cache keys over identifier lists.
//! - `gateway`: the `CatalogGateway` trait the orchestrator talks to.
//!
//! Everything except `gateway` is synchronous and pure; the selection and
//! partitioning functions own no state and never suspend.
#![warn(missing_docs)]

/// Catalog gateway trait implemented by catalog clients and mocks.
pub mod gateway;
/// Interval model derived from catalog records.
pub mod interval;
/// Canonical, order-independent keys over identifier lists.
pub mod key;
/// Per-category selection.
pub mod partition;
/// Greedy earliest-finish selection.
pub mod select;

pub use discount_types::*;
pub use gateway::CatalogGateway;
pub use interval::{Interval, intervals_from_items};
pub use key::CanonicalKey;
pub use partition::{IntervalGroup, select_max_non_overlapping_by_category};
pub use select::{select_items, select_max_non_overlapping};
