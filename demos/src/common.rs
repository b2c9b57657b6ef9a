use discount::CatalogGateway;
use discount_items::{ItemsGateway, ItemsGatewayConfig};
use std::sync::Arc;

/// Return a catalog gateway for demos.
///
/// Uses the in-memory fixture catalog when `DISCOUNT_DEMOS_USE_MOCK` is set,
/// otherwise the Items service at `DISCOUNT_ITEMS_URL` (default
/// `http://localhost:8080/items`).
///
/// # Panics
/// Panics if the items URL does not parse.
#[must_use]
pub fn get_gateway() -> Arc<dyn CatalogGateway> {
    if std::env::var("DISCOUNT_DEMOS_USE_MOCK").is_ok() {
        println!("--- (Using in-memory catalog for CI) ---");
        Arc::new(discount_mock::InMemoryCatalog::fixtures())
    } else {
        let mut cfg = ItemsGatewayConfig::default();
        if let Ok(url) = std::env::var("DISCOUNT_ITEMS_URL") {
            cfg = cfg.with_items_url(url);
        }
        Arc::new(ItemsGateway::new(cfg).expect("valid items gateway configuration"))
    }
}
