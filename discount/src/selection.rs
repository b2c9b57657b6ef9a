use std::collections::{HashMap, HashSet};

use discount_core::{
    CanonicalKey, CategoryGroup, DiscountError, Interval, IntervalGroup, Item, Operation,
    select_items, select_max_non_overlapping_by_category,
};

use crate::Discount;
use crate::core::with_request_deadline;

impl Discount {
    /// Largest set of requested items whose active intervals do not overlap.
    ///
    /// Identifiers are deduplicated and sorted before anything else, so the
    /// result depends only on the set of requested ids. An empty request
    /// returns an empty list without touching the gateway. Items unknown to
    /// the gateway are ignored.
    ///
    /// # Errors
    /// - `MissingTimestamp` when a returned item lacks `date_created` or `last_updated`.
    /// - `Gateway`, `GatewayStatus`, `GatewayTimeout` on gateway failure.
    /// - `RequestTimeout` / `Interrupted` when the deadline or interrupt fires.
    ///
    /// Errors are never cached; retrying recomputes.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "discount::selection",
            skip(self, ids),
            fields(requested = ids.len()),
        )
    )]
    pub async fn max_non_overlapping<S>(&self, ids: &[S]) -> Result<Vec<String>, DiscountError>
    where
        S: AsRef<str>,
    {
        let key = CanonicalKey::new(ids);
        if key.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!(target: "discount::selection", "empty request short-circuited");
            return Ok(Vec::new());
        }
        let compute = || self.compute_selection(&key);
        let fut = async {
            match &self.cache {
                Some(cache) => cache.selection(&key, compute).await,
                None => compute().await,
            }
        };
        with_request_deadline(self.cfg.request_timeout, Operation::Select, fut).await
    }

    /// Largest non-overlapping subset of the requested items within each root
    /// category, computed independently per category.
    ///
    /// Groups keep the gateway's order; groups left without a selected item
    /// are omitted. Items the gateway cannot place in a category are ignored.
    ///
    /// # Errors
    /// Same as [`max_non_overlapping`](Self::max_non_overlapping).
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "discount::selection",
            skip(self, ids),
            fields(requested = ids.len()),
        )
    )]
    pub async fn max_non_overlapping_by_category<S>(
        &self,
        ids: &[S],
    ) -> Result<Vec<CategoryGroup>, DiscountError>
    where
        S: AsRef<str>,
    {
        let key = CanonicalKey::new(ids);
        if key.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!(target: "discount::selection", "empty request short-circuited");
            return Ok(Vec::new());
        }
        let compute = || self.compute_selection_by_category(&key);
        let fut = async {
            match &self.cache {
                Some(cache) => cache.selection_by_category(&key, compute).await,
                None => compute().await,
            }
        };
        with_request_deadline(self.cfg.request_timeout, Operation::SelectByCategory, fut).await
    }

    async fn compute_selection(&self, key: &CanonicalKey) -> Result<Vec<String>, DiscountError> {
        let items = self
            .call_gateway(
                Operation::FetchItems,
                self.gateway.fetch_items_by_ids(key.ids()),
            )
            .await?;
        select_items(&items)
    }

    async fn compute_selection_by_category(
        &self,
        key: &CanonicalKey,
    ) -> Result<Vec<CategoryGroup>, DiscountError> {
        let groups = self
            .call_gateway(
                Operation::GroupByRootCategory,
                self.gateway.group_by_root_category(key.ids()),
            )
            .await?;

        // One batched fetch for every id the gateway managed to group.
        let mut seen: HashSet<&str> = HashSet::new();
        let grouped: Vec<String> = groups
            .iter()
            .flat_map(|g| g.item_ids.iter())
            .filter(|id| seen.insert(id.as_str()))
            .cloned()
            .collect();
        if grouped.is_empty() {
            return Ok(Vec::new());
        }
        let items = self
            .call_gateway(
                Operation::FetchItems,
                self.gateway.fetch_items_by_ids(&grouped),
            )
            .await?;

        let interval_groups = interval_groups(&groups, &items)?;
        Ok(select_max_non_overlapping_by_category(&interval_groups))
    }
}

/// Attach intervals to grouped ids, skipping ids the item fetch did not return.
fn interval_groups(
    groups: &[CategoryGroup],
    items: &[Item],
) -> Result<Vec<IntervalGroup>, DiscountError> {
    let by_id: HashMap<&str, &Item> = items.iter().map(|it| (it.id.as_str(), it)).collect();
    groups
        .iter()
        .map(|g| -> Result<IntervalGroup, DiscountError> {
            let intervals = g
                .item_ids
                .iter()
                .filter_map(|id| by_id.get(id.as_str()).copied())
                .map(Interval::try_from)
                .collect::<Result<Vec<_>, _>>()?;
            #[cfg(feature = "tracing")]
            if intervals.len() < g.item_ids.len() {
                tracing::debug!(
                    target: "discount::selection",
                    root_category_id = %g.root_category_id,
                    skipped = g.item_ids.len() - intervals.len(),
                    "grouped ids missing from item fetch"
                );
            }
            Ok(IntervalGroup::new(g.root_category_id.clone(), intervals))
        })
        .collect()
}
