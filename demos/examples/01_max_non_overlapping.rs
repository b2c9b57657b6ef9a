use discount::Discount;
use discount_demos::common::get_gateway;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Gateway (in-memory when DISCOUNT_DEMOS_USE_MOCK is set).
    let gateway = get_gateway();

    // 2. Orchestrator with the default cache: 5000 entries, 15 minutes.
    let discount = Discount::builder().with_gateway(gateway).build()?;

    // 3. Two disjoint listings: both are kept.
    let both = discount.max_non_overlapping(&["MLA1", "MLA2"]).await?;
    println!("MLA1 + MLA2       -> {both:?}");

    // 4. ML1999 lies inside MLA1 and ends first: it wins.
    let nested = discount.max_non_overlapping(&["MLA1", "ML1999"]).await?;
    println!("MLA1 + ML1999     -> {nested:?}");

    // 5. Order and duplicates do not matter.
    let again = discount
        .max_non_overlapping(&["ML1999", "MLA1", "ML1999"])
        .await?;
    println!("reordered request -> {again:?}");

    Ok(())
}
