use discount::Discount;
use discount_demos::common::get_gateway;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let discount = Discount::builder().with_gateway(get_gateway()).build()?;

    let requested = ["MLA10", "MLA11", "MLA12", "MLA20"];

    let global = discount.max_non_overlapping(&requested).await?;
    println!("global selection: {global:?}");

    // Each root category is solved on its own, so MLA20 survives in its group.
    let groups = discount.max_non_overlapping_by_category(&requested).await?;
    for g in &groups {
        println!("{:<10} {:?}", g.root_category_id, g.item_ids);
    }

    Ok(())
}
