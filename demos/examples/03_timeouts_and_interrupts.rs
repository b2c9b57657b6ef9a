use std::time::Duration;

use discount::{Discount, DiscountError, Interrupt};
use discount_demos::common::get_gateway;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let interrupt = Interrupt::new();
    let discount = Discount::builder()
        .with_gateway(get_gateway())
        .gateway_timeout(Duration::from_secs(2))
        .request_timeout(Duration::from_secs(5))
        .interrupt(interrupt.clone())
        .build()?;

    let ids = discount.max_non_overlapping(&["MLA1", "MLA2"]).await?;
    println!("before interrupt: {ids:?}");

    // Cached results are still served; new ids need the gateway and fail.
    interrupt.trigger();
    let cached = discount.max_non_overlapping(&["MLA2", "MLA1"]).await?;
    println!("cached after interrupt: {cached:?}");

    match discount.max_non_overlapping(&["ML1999"]).await {
        Err(e @ DiscountError::Interrupted { .. }) => {
            println!("fresh request: {e} (transient: {})", e.is_transient());
        }
        other => println!("unexpected: {other:?}"),
    }

    Ok(())
}
