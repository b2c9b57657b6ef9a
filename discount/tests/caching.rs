mod helpers;

use std::sync::Arc;
use std::time::Duration;

use discount::{CacheConfig, Discount, DiscountError, Item, Operation};
use discount_mock::{DynamicMockGateway, MockBehavior};
use helpers::{discount_over, fixture_gateway, group};

#[tokio::test]
async fn reordered_and_duplicated_request_is_served_from_cache() {
    let gw = fixture_gateway();
    let d = discount_over(&gw);

    let first = d.max_non_overlapping(&["MLA1", "MLA2"]).await.unwrap();
    let calls = gw.total_calls();
    assert_eq!(calls, 1);

    let second = d
        .max_non_overlapping(&["MLA2", "MLA1", "MLA2"])
        .await
        .unwrap();
    assert_eq!(second, first);
    assert_eq!(gw.total_calls(), calls, "no gateway call on a hit");
}

#[tokio::test]
async fn operations_do_not_share_entries() {
    let gw = fixture_gateway();
    let d = discount_over(&gw);

    let flat = d.max_non_overlapping(&["MLA1", "MLA2"]).await.unwrap();
    let grouped = d
        .max_non_overlapping_by_category(&["MLA1", "MLA2"])
        .await
        .unwrap();
    assert_eq!(flat, vec!["MLA1", "MLA2"]);
    assert_eq!(grouped, vec![group("MLA1000", &["MLA1", "MLA2"])]);
    assert_eq!(gw.group_calls(), 1);

    let cache = d.cache().unwrap();
    assert_eq!(cache.entry_count(Operation::Select).await, 1);
    assert_eq!(cache.entry_count(Operation::SelectByCategory).await, 1);
}

#[tokio::test]
async fn without_cache_every_call_reaches_the_gateway() {
    let gw = fixture_gateway();
    let d = Discount::builder()
        .with_gateway(gw.clone())
        .without_cache()
        .build()
        .unwrap();
    for _ in 0..3 {
        d.max_non_overlapping(&["MLA1"]).await.unwrap();
    }
    assert_eq!(gw.fetch_calls(), 3);
    assert!(d.cache().is_none());
}

#[tokio::test]
async fn expired_entries_are_recomputed() {
    let gw = fixture_gateway();
    let d = Discount::builder()
        .with_gateway(gw.clone())
        .cache(CacheConfig::default().with_ttl(Operation::Select, Duration::from_millis(40)))
        .build()
        .unwrap();

    d.max_non_overlapping(&["MLA1"]).await.unwrap();
    d.max_non_overlapping(&["MLA1"]).await.unwrap();
    assert_eq!(gw.fetch_calls(), 1);
    tokio::time::sleep(Duration::from_millis(80)).await;
    d.max_non_overlapping(&["MLA1"]).await.unwrap();
    assert_eq!(gw.fetch_calls(), 2);
}

#[tokio::test]
async fn cache_bound_holds_under_many_distinct_requests() {
    let gw = fixture_gateway();
    let d = Discount::builder()
        .with_gateway(gw.clone())
        .cache(CacheConfig::default().with_max_entries(Operation::Select, 2))
        .build()
        .unwrap();
    for id in ["MLA1", "MLA2", "ML1999", "MLA10", "MLA11", "MLA12"] {
        d.max_non_overlapping(&[id]).await.unwrap();
    }
    assert!(d.cache().unwrap().entry_count(Operation::Select).await <= 2);
}

#[tokio::test]
async fn failures_are_not_cached_and_retry_recomputes() {
    let (mock, controller) = DynamicMockGateway::new_with_controller("flaky");
    let d = Discount::builder().with_gateway(mock).build().unwrap();

    controller
        .set_items_behavior(MockBehavior::Fail(DiscountError::gateway_status("flaky", 502)))
        .await;
    let err = d.max_non_overlapping(&["A"]).await.unwrap_err();
    assert_eq!(err, DiscountError::gateway_status("flaky", 502));
    assert!(err.is_transient());

    let ts = |s: &str| chrono::DateTime::parse_from_rfc3339(s).ok();
    controller
        .set_items_behavior(MockBehavior::Return(vec![Item::new(
            "A",
            "C",
            ts("2024-11-19T18:00:00-03:00"),
            ts("2024-11-24T18:00:00-03:00"),
        )]))
        .await;
    let ok = d.max_non_overlapping(&["A"]).await.unwrap();
    assert_eq!(ok, vec!["A"]);
    assert_eq!(controller.calls(Operation::FetchItems), 2);

    // Now cached: a failing gateway is not consulted.
    controller
        .set_items_behavior(MockBehavior::Fail(DiscountError::Other("down".into())))
        .await;
    assert_eq!(d.max_non_overlapping(&["A"]).await.unwrap(), vec!["A"]);
    assert_eq!(controller.calls(Operation::FetchItems), 2);
}

#[tokio::test]
async fn gateway_receives_the_canonical_id_list() {
    let (mock, controller) = DynamicMockGateway::new_with_controller("log");
    controller
        .set_items_behavior(MockBehavior::Return(Vec::new()))
        .await;
    let d = Discount::builder()
        .with_gateway(Arc::clone(&mock))
        .build()
        .unwrap();
    d.max_non_overlapping(&["b", "a", "b", "c"]).await.unwrap();
    let reqs = controller.requests().await;
    assert_eq!(reqs.len(), 1);
    assert_eq!(reqs[0].1, vec!["a", "b", "c"]);
}
