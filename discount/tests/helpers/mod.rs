#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use discount::{CatalogGateway, CategoryGroup, Discount, DiscountError, Item};
use discount_mock::InMemoryCatalog;

/// Wraps another gateway and counts the calls it forwards.
pub struct CountingGateway {
    inner: Arc<dyn CatalogGateway>,
    delay: Option<Duration>,
    fetch_calls: AtomicUsize,
    group_calls: AtomicUsize,
}

impl CountingGateway {
    pub fn new(inner: Arc<dyn CatalogGateway>) -> Arc<Self> {
        Arc::new(Self {
            inner,
            delay: None,
            fetch_calls: AtomicUsize::new(0),
            group_calls: AtomicUsize::new(0),
        })
    }

    pub fn with_delay(inner: Arc<dyn CatalogGateway>, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            inner,
            delay: Some(delay),
            fetch_calls: AtomicUsize::new(0),
            group_calls: AtomicUsize::new(0),
        })
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn group_calls(&self) -> usize {
        self.group_calls.load(Ordering::SeqCst)
    }

    pub fn total_calls(&self) -> usize {
        self.fetch_calls() + self.group_calls()
    }

    async fn pause(&self) {
        if let Some(d) = self.delay {
            tokio::time::sleep(d).await;
        }
    }
}

#[async_trait]
impl CatalogGateway for CountingGateway {
    fn name(&self) -> &'static str {
        "counting"
    }

    async fn fetch_items_by_ids(&self, ids: &[String]) -> Result<Vec<Item>, DiscountError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        self.inner.fetch_items_by_ids(ids).await
    }

    async fn group_by_root_category(
        &self,
        ids: &[String],
    ) -> Result<Vec<CategoryGroup>, DiscountError> {
        self.group_calls.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        self.inner.group_by_root_category(ids).await
    }
}

/// Fixture catalog behind a call counter.
pub fn fixture_gateway() -> Arc<CountingGateway> {
    CountingGateway::new(Arc::new(InMemoryCatalog::fixtures()))
}

/// Orchestrator over `gw` with default cache settings.
pub fn discount_over(gw: &Arc<CountingGateway>) -> Discount {
    Discount::builder()
        .with_gateway(gw.clone())
        .build()
        .expect("gateway set")
}

pub fn ids(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| (*s).to_string()).collect()
}

pub fn group(root: &str, members: &[&str]) -> CategoryGroup {
    CategoryGroup::new(root, ids(members))
}
