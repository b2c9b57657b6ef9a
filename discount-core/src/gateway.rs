use async_trait::async_trait;

use crate::{CategoryGroup, DiscountError, Item};

/// Read-only access to the item catalog.
///
/// Implementations are external collaborators (an HTTP client, an in-memory
/// fixture, a scripted mock) handed to the orchestrator as
/// `Arc<dyn CatalogGateway>`. Both methods must return an empty result for an
/// empty identifier list without performing any I/O.
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    /// Stable gateway name used in errors and logs.
    fn name(&self) -> &'static str;

    /// Resolve the records of the given identifiers.
    ///
    /// Unknown identifiers are omitted from the result rather than reported.
    async fn fetch_items_by_ids(&self, ids: &[String]) -> Result<Vec<Item>, DiscountError>;

    /// Partition the given identifiers by the root category of their items.
    ///
    /// Group order is the gateway's; identifiers whose category cannot be
    /// resolved are left out of every group.
    async fn group_by_root_category(
        &self,
        ids: &[String],
    ) -> Result<Vec<CategoryGroup>, DiscountError>;
}
