//! Discount-specific data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod config;
mod error;
mod item;
mod operation;

pub use config::{CacheConfig, DiscountConfig};
pub use error::DiscountError;
pub use item::{CategoryGroup, Item};
pub use operation::Operation;
