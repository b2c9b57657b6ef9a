use discount_types::CategoryGroup;

use crate::interval::Interval;
use crate::select::select_max_non_overlapping;

/// Intervals of the items belonging to one root category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalGroup {
    /// Root category shared by every interval in the group.
    pub root_category_id: String,
    /// Member intervals in gateway order.
    pub intervals: Vec<Interval>,
}

impl IntervalGroup {
    /// Construct a group from a root category and its intervals.
    pub fn new(root_category_id: impl Into<String>, intervals: Vec<Interval>) -> Self {
        Self {
            root_category_id: root_category_id.into(),
            intervals,
        }
    }
}

/// Run the greedy selection independently inside every group.
///
/// Each group only sees its own intervals. Groups whose selection is empty are
/// omitted; the rest keep their input order.
#[must_use]
pub fn select_max_non_overlapping_by_category(groups: &[IntervalGroup]) -> Vec<CategoryGroup> {
    groups
        .iter()
        .filter_map(|group| {
            let selected = select_max_non_overlapping(&group.intervals);
            (!selected.is_empty())
                .then(|| CategoryGroup::new(group.root_category_id.clone(), selected))
        })
        .collect()
}
