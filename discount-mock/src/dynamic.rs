use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use discount_core::{CatalogGateway, CategoryGroup, DiscountError, Item, Operation};

/// Instruction for how a gateway operation should behave.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(DiscountError),
    /// Hang indefinitely (simulate a stalled upstream).
    Hang,
}

#[derive(Default)]
struct InternalState {
    items_rule: Option<MockBehavior<Vec<Item>>>,
    groups_rule: Option<MockBehavior<Vec<CategoryGroup>>>,
    requests: Vec<(Operation, Vec<String>)>,
}

#[derive(Default)]
struct Counters {
    fetch_items: AtomicUsize,
    group_by_root_category: AtomicUsize,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
    counters: Arc<Counters>,
}

impl DynamicMockController {
    /// Set the behavior of `fetch_items_by_ids`.
    ///
    /// A `Return` value is filtered down to the requested identifiers.
    pub async fn set_items_behavior(&self, behavior: MockBehavior<Vec<Item>>) {
        let mut guard = self.state.lock().await;
        guard.items_rule = Some(behavior);
    }

    /// Set the behavior of `group_by_root_category`.
    ///
    /// A `Return` value is filtered down to the requested identifiers; groups
    /// left empty are dropped.
    pub async fn set_groups_behavior(&self, behavior: MockBehavior<Vec<CategoryGroup>>) {
        let mut guard = self.state.lock().await;
        guard.groups_rule = Some(behavior);
    }

    /// Number of calls received by a gateway operation so far.
    #[must_use]
    pub fn calls(&self, op: Operation) -> usize {
        match op {
            Operation::FetchItems => self.counters.fetch_items.load(Ordering::SeqCst),
            Operation::GroupByRootCategory => {
                self.counters.group_by_root_category.load(Ordering::SeqCst)
            }
            _ => 0,
        }
    }

    /// Total gateway calls across both operations.
    #[must_use]
    pub fn total_calls(&self) -> usize {
        self.calls(Operation::FetchItems) + self.calls(Operation::GroupByRootCategory)
    }

    /// Return a copy of the request log, in arrival order.
    pub async fn requests(&self) -> Vec<(Operation, Vec<String>)> {
        let guard = self.state.lock().await;
        guard.requests.clone()
    }

    /// Clear all configured behaviors, request logs and counters.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.items_rule = None;
        guard.groups_rule = None;
        guard.requests.clear();
        self.counters.fetch_items.store(0, Ordering::SeqCst);
        self.counters.group_by_root_category.store(0, Ordering::SeqCst);
    }
}

/// A gateway that defers all behavior to an external controller.
///
/// Operations without a configured behavior fail with a `Gateway` error.
pub struct DynamicMockGateway {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
    counters: Arc<Counters>,
}

impl DynamicMockGateway {
    /// Create a new dynamic mock gateway and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn CatalogGateway>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let counters = Arc::new(Counters::default());
        let controller = DynamicMockController {
            state: Arc::clone(&state),
            counters: Arc::clone(&counters),
        };
        let me = Arc::new(Self {
            name,
            state,
            counters,
        });
        (me as Arc<dyn CatalogGateway>, controller)
    }

    fn unconfigured(&self, op: Operation) -> DiscountError {
        DiscountError::gateway(self.name, format!("no behavior configured for {op}"))
    }
}

#[async_trait]
impl CatalogGateway for DynamicMockGateway {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn fetch_items_by_ids(&self, ids: &[String]) -> Result<Vec<Item>, DiscountError> {
        self.counters.fetch_items.fetch_add(1, Ordering::SeqCst);
        // Log and snapshot the behavior without holding the lock across awaits
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.requests.push((Operation::FetchItems, ids.to_vec()));
            guard.items_rule.clone()
        };

        match behavior {
            Some(MockBehavior::Return(items)) => Ok(items
                .into_iter()
                .filter(|it| ids.contains(&it.id))
                .collect()),
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => {
                std::future::pending::<()>().await;
                unreachable!()
            }
            None => Err(self.unconfigured(Operation::FetchItems)),
        }
    }

    async fn group_by_root_category(
        &self,
        ids: &[String],
    ) -> Result<Vec<CategoryGroup>, DiscountError> {
        self.counters
            .group_by_root_category
            .fetch_add(1, Ordering::SeqCst);
        let behavior = {
            let mut guard = self.state.lock().await;
            guard
                .requests
                .push((Operation::GroupByRootCategory, ids.to_vec()));
            guard.groups_rule.clone()
        };

        match behavior {
            Some(MockBehavior::Return(groups)) => Ok(groups
                .into_iter()
                .filter_map(|mut g| {
                    g.item_ids.retain(|id| ids.contains(id));
                    (!g.item_ids.is_empty()).then_some(g)
                })
                .collect()),
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => {
                std::future::pending::<()>().await;
                unreachable!()
            }
            None => Err(self.unconfigured(Operation::GroupByRootCategory)),
        }
    }
}
