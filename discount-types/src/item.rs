use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Catalog record of a single listed item, as produced by the Items service.
///
/// Timestamps are optional on the wire: an absent, `null` or empty value is
/// decoded as `None` so that the interval model can report the item as a
/// data-integrity fault instead of failing the whole response decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique item identifier (e.g. `MLA1`). Catalog documents keyed by id may
    /// omit it.
    #[serde(default)]
    pub id: String,
    /// Seller identifier.
    #[serde(default)]
    pub seller_id: String,
    /// Listing title.
    #[serde(default)]
    pub title: String,
    /// Leaf category identifier.
    #[serde(default)]
    pub category_id: String,
    /// Listing price. Carried through untouched; selection never reads it.
    #[serde(default)]
    pub price: Decimal,
    /// Creation timestamp; start of the item's active interval.
    #[serde(default, with = "timestamp")]
    pub date_created: Option<DateTime<FixedOffset>>,
    /// Last-update timestamp; end of the item's active interval.
    #[serde(default, with = "timestamp")]
    pub last_updated: Option<DateTime<FixedOffset>>,
}

impl Item {
    /// Build an item with the fields selection cares about; the rest stay empty.
    pub fn new(
        id: impl Into<String>,
        category_id: impl Into<String>,
        date_created: Option<DateTime<FixedOffset>>,
        last_updated: Option<DateTime<FixedOffset>>,
    ) -> Self {
        Self {
            id: id.into(),
            seller_id: String::new(),
            title: String::new(),
            category_id: category_id.into(),
            price: Decimal::ZERO,
            date_created,
            last_updated,
        }
    }
}

/// Item identifiers sharing one root category.
///
/// The catalog gateway returns this shape for grouping requests, and the
/// per-category selection returns it with only the selected identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryGroup {
    /// Top-most ancestor of the items' categories.
    pub root_category_id: String,
    /// Item identifiers in this group, in gateway (or selection) order.
    pub item_ids: Vec<String>,
}

impl CategoryGroup {
    /// Construct a group from a root category and its item identifiers.
    pub fn new(root_category_id: impl Into<String>, item_ids: Vec<String>) -> Self {
        Self {
            root_category_id: root_category_id.into(),
            item_ids,
        }
    }
}

/// ISO-8601 timestamps with offset and microsecond precision, e.g.
/// `2024-11-19T18:00:00.000000-03:00`.
mod timestamp {
    use chrono::{DateTime, FixedOffset};
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f%:z";

    #[allow(clippy::ref_option)]
    pub fn serialize<S>(value: &Option<DateTime<FixedOffset>>, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => s.serialize_str(&ts.format(FORMAT).to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Option<DateTime<FixedOffset>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(d)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => DateTime::parse_from_rfc3339(s)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}
