use std::time::Duration;

use discount_core::{CatalogGateway, CategoryGroup, DiscountError};
use discount_items::{ItemsGateway, ItemsGatewayConfig};
use httpmock::prelude::*;
use serde_json::json;

fn ids(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| (*s).to_string()).collect()
}

fn gateway_for(server: &MockServer) -> ItemsGateway {
    ItemsGateway::new(ItemsGatewayConfig::default().with_items_url(server.url("/items")))
        .expect("gateway")
}

#[tokio::test]
async fn fetches_items_with_csv_ids() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/items").query_param("ids", "MLA1,MLA2");
            then.status(200).json_body(json!([
                {
                    "id": "MLA1", "seller_id": "S1", "title": "Phone",
                    "category_id": "MLA1055", "price": 150.0,
                    "date_created": "2024-11-19T18:00:00.000000-03:00",
                    "last_updated": "2024-11-24T18:00:00.000000-03:00"
                },
                {
                    "id": "MLA2", "seller_id": "S1", "title": "Case",
                    "category_id": "MLA1055", "price": 9.99,
                    "date_created": "2024-11-25T00:00:00.000000-03:00",
                    "last_updated": null
                }
            ]));
        })
        .await;

    let gw = gateway_for(&server);
    let items = gw.fetch_items_by_ids(&ids(&["MLA1", "MLA2"])).await.unwrap();
    mock.assert_hits_async(1).await;
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, "MLA1");
    assert!(items[0].last_updated.is_some());
    assert!(items[1].last_updated.is_none());
}

#[tokio::test]
async fn groups_hit_the_derived_categories_endpoint() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/categories").query_param("ids", "MLA1,MLA3");
            then.status(200).json_body(json!([
                {"root_category_id": "MLA1000", "item_ids": ["MLA1"]},
                {"root_category_id": "MLA5725", "item_ids": ["MLA3"]}
            ]));
        })
        .await;

    let gw = gateway_for(&server);
    let groups = gw
        .group_by_root_category(&ids(&["MLA1", "MLA3"]))
        .await
        .unwrap();
    mock.assert_hits_async(1).await;
    assert_eq!(
        groups,
        vec![
            CategoryGroup::new("MLA1000", ids(&["MLA1"])),
            CategoryGroup::new("MLA5725", ids(&["MLA3"])),
        ]
    );
}

#[tokio::test]
async fn empty_input_sends_no_request() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET);
            then.status(200).json_body(json!([]));
        })
        .await;

    let gw = gateway_for(&server);
    assert!(gw.fetch_items_by_ids(&[]).await.unwrap().is_empty());
    assert!(gw.group_by_root_category(&[]).await.unwrap().is_empty());
    mock.assert_hits_async(0).await;
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/items");
            then.status(503);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/categories");
            then.status(404).json_body(json!({"error": "items not found"}));
        })
        .await;

    let gw = gateway_for(&server);
    let err = gw.fetch_items_by_ids(&ids(&["MLA1"])).await.unwrap_err();
    assert_eq!(err, DiscountError::gateway_status("discount-items", 503));
    assert!(err.is_transient());
    assert_eq!(err.to_string(), "discount-items responded HTTP 503");

    let err = gw.group_by_root_category(&ids(&["nope"])).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn undecodable_body_is_a_gateway_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/items");
            then.status(200).body("<html>oops</html>");
        })
        .await;

    let gw = gateway_for(&server);
    let err = gw.fetch_items_by_ids(&ids(&["MLA1"])).await.unwrap_err();
    assert!(matches!(err, DiscountError::Gateway { .. }), "{err:?}");
}

#[tokio::test]
async fn slow_upstream_times_out() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/items");
            then.status(200)
                .delay(Duration::from_millis(500))
                .json_body(json!([]));
        })
        .await;

    let cfg = ItemsGatewayConfig::default()
        .with_items_url(server.url("/items"))
        .with_request_timeout(Duration::from_millis(50));
    let gw = ItemsGateway::new(cfg).unwrap();
    let err = gw.fetch_items_by_ids(&ids(&["MLA1"])).await.unwrap_err();
    assert_eq!(
        err,
        DiscountError::gateway_timeout("discount-items", "fetch-items")
    );
}
