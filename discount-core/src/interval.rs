use chrono::{DateTime, FixedOffset};
use discount_types::{DiscountError, Item};

/// Active period of one item: `[date_created, last_updated]`.
///
/// `start <= end` is not enforced; catalog data may violate it and selection
/// only relies on the ordering of end timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Interval {
    /// Identifier of the item this interval was derived from.
    pub item_id: String,
    /// Creation timestamp.
    pub start: DateTime<FixedOffset>,
    /// Last-update timestamp.
    pub end: DateTime<FixedOffset>,
}

impl Interval {
    /// Construct an interval directly from its parts.
    pub fn new(
        item_id: impl Into<String>,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            item_id: item_id.into(),
            start,
            end,
        }
    }

    /// True when `self` and `other` share more than a single boundary instant.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        !(self.end <= other.start || other.end <= self.start)
    }
}

impl TryFrom<&Item> for Interval {
    type Error = DiscountError;

    /// Derive the interval of an item.
    ///
    /// # Errors
    /// Returns `MissingTimestamp` naming the item when either timestamp is absent.
    fn try_from(item: &Item) -> Result<Self, Self::Error> {
        let start = item
            .date_created
            .ok_or_else(|| DiscountError::missing_timestamp(&item.id, "date_created"))?;
        let end = item
            .last_updated
            .ok_or_else(|| DiscountError::missing_timestamp(&item.id, "last_updated"))?;
        Ok(Self::new(item.id.clone(), start, end))
    }
}

/// Derive intervals for a batch of items, preserving their order.
///
/// # Errors
/// Fails on the first item missing a timestamp; no item is silently dropped.
pub fn intervals_from_items<'a, I>(items: I) -> Result<Vec<Interval>, DiscountError>
where
    I: IntoIterator<Item = &'a Item>,
{
    items.into_iter().map(Interval::try_from).collect()
}
