use std::time::Duration;

use discount_core::{CategoryGroup, DiscountError, Item, Operation};
use discount_mock::{DynamicMockGateway, MockBehavior};

fn ids(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| (*s).to_string()).collect()
}

#[tokio::test]
async fn return_is_filtered_to_requested_ids() {
    let (mock, controller) = DynamicMockGateway::new_with_controller("P0");
    controller
        .set_items_behavior(MockBehavior::Return(vec![
            Item::new("MLA1", "C", None, None),
            Item::new("MLA2", "C", None, None),
        ]))
        .await;

    let got = mock.fetch_items_by_ids(&ids(&["MLA2"])).await.unwrap();
    assert_eq!(got.len(), 1);
    assert_eq!(got[0].id, "MLA2");
    assert_eq!(controller.calls(Operation::FetchItems), 1);
    assert_eq!(controller.calls(Operation::GroupByRootCategory), 0);
}

#[tokio::test]
async fn groups_emptied_by_filtering_are_dropped() {
    let (mock, controller) = DynamicMockGateway::new_with_controller("P0");
    controller
        .set_groups_behavior(MockBehavior::Return(vec![
            CategoryGroup::new("R1", ids(&["a", "b"])),
            CategoryGroup::new("R2", ids(&["c"])),
        ]))
        .await;
    let got = mock.group_by_root_category(&ids(&["b"])).await.unwrap();
    assert_eq!(got, vec![CategoryGroup::new("R1", ids(&["b"]))]);
}

#[tokio::test]
async fn fail_returns_the_configured_error() {
    let (mock, controller) = DynamicMockGateway::new_with_controller("P0");
    let err = DiscountError::gateway_status("P0", 503);
    controller
        .set_items_behavior(MockBehavior::Fail(err.clone()))
        .await;
    let got = mock.fetch_items_by_ids(&ids(&["x"])).await.unwrap_err();
    assert_eq!(got, err);
}

#[tokio::test]
async fn unconfigured_operation_fails() {
    let (mock, _controller) = DynamicMockGateway::new_with_controller("P0");
    let got = mock.group_by_root_category(&ids(&["x"])).await.unwrap_err();
    assert!(matches!(got, DiscountError::Gateway { .. }));
}

#[tokio::test(start_paused = true)]
async fn hang_never_completes() {
    let (mock, controller) = DynamicMockGateway::new_with_controller("P0");
    controller.set_items_behavior(MockBehavior::Hang).await;
    let ids = ids(&["x"]);
    let res = tokio::time::timeout(Duration::from_secs(30), mock.fetch_items_by_ids(&ids)).await;
    assert!(res.is_err());
    assert_eq!(controller.calls(Operation::FetchItems), 1);
}

#[tokio::test]
async fn logs_requests_and_clears() {
    let (mock, controller) = DynamicMockGateway::new_with_controller("P0");
    controller
        .set_items_behavior(MockBehavior::Return(Vec::new()))
        .await;
    let _ = mock.fetch_items_by_ids(&ids(&["a", "b"])).await;
    let _ = mock.group_by_root_category(&ids(&["c"])).await;

    let reqs = controller.requests().await;
    assert_eq!(
        reqs,
        vec![
            (Operation::FetchItems, ids(&["a", "b"])),
            (Operation::GroupByRootCategory, ids(&["c"])),
        ]
    );
    assert_eq!(controller.total_calls(), 2);

    controller.clear_all_behaviors().await;
    assert_eq!(controller.total_calls(), 0);
    assert!(controller.requests().await.is_empty());
}
