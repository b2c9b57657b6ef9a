use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// Order- and duplicate-insensitive identity of a requested identifier set.
///
/// Identifiers are deduplicated and sorted lexicographically, so
/// `["MLA2", "MLA1", "MLA2"]` and `["MLA1", "MLA2"]` produce equal keys. The
/// canonical list is also what the orchestrator sends to the catalog gateway,
/// which keeps computed results independent of the caller's ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalKey {
    ids: Arc<[String]>,
}

impl CanonicalKey {
    /// Display form of the empty identifier set.
    pub const EMPTY_REPR: &'static str = "[]";

    /// Canonicalize a list of identifiers.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set: BTreeSet<String> = ids.into_iter().map(|s| s.as_ref().to_owned()).collect();
        Self {
            ids: set.into_iter().collect(),
        }
    }

    /// Canonicalize an optional list; `None` maps to the empty-set key.
    pub fn from_optional<S>(ids: Option<&[S]>) -> Self
    where
        S: AsRef<str>,
    {
        ids.map_or_else(Self::empty, |ids| Self::new(ids))
    }

    /// The distinguished key of the empty identifier set.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            ids: Arc::from(Vec::<String>::new()),
        }
    }

    /// True for the empty-set key; such requests never reach the gateway.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Number of distinct identifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Distinct identifiers in ascending order.
    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str(Self::EMPTY_REPR)
        } else {
            f.write_str(&self.ids.join(","))
        }
    }
}
