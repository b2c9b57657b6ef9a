use core::fmt;
use serde::{Deserialize, Serialize};

/// High-level operation labels for cache namespaces, errors, and telemetry.
///
/// The two selection operations produce different result shapes over the same
/// identifier set, so each one owns a separate cache namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Operation {
    /// Maximum non-overlapping subset across every requested item.
    Select,
    /// Maximum non-overlapping subset computed per root category.
    SelectByCategory,

    /// Catalog gateway: resolve item records by identifier.
    FetchItems,
    /// Catalog gateway: group identifiers by root category.
    GroupByRootCategory,
}

impl Operation {
    /// Stable, kebab-case identifier for logs/errors/config keys.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::SelectByCategory => "select-by-category",
            Self::FetchItems => "fetch-items",
            Self::GroupByRootCategory => "group-by-root-category",
        }
    }

    /// Operations whose results are memoized by the result cache.
    pub const CACHED: [Self; 2] = [Self::Select, Self::SelectByCategory];
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
