#![doc = include_str!("../README.md")]

mod result;
mod store;

pub use crate::result::ResultCache;
pub use crate::store::{CacheStore, TtlLruStore};
