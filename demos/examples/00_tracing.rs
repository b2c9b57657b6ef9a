use discount::Discount;
use discount_demos::common::get_gateway;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize a human-friendly tracing subscriber with env-based filtering.
    // Suggested: RUST_LOG=info,discount=trace,discount_cache=debug,discount_items=debug
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let discount = Discount::builder().with_gateway(get_gateway()).build()?;
    if let Some(cache) = discount.cache() {
        tracing::info!(policy = %cache.config_json(), "result cache configured");
    }

    // Miss, then a hit for the same id set in another order.
    let _ = discount.max_non_overlapping(&["MLA1", "MLA2"]).await?;
    let _ = discount.max_non_overlapping(&["MLA2", "MLA1", "MLA1"]).await?;

    // Empty requests short-circuit before the cache.
    let none: [&str; 0] = [];
    let _ = discount.max_non_overlapping(&none).await?;

    let _ = discount
        .max_non_overlapping_by_category(&["MLA1", "MLA10", "MLA20"])
        .await?;

    Ok(())
}
