use chrono::{DateTime, FixedOffset};
use discount_core::Item;
use rust_decimal::Decimal;

fn ts(s: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(s).ok()
}

fn item(id: &str, category: &str, price: i64, created: &str, updated: &str) -> Item {
    let mut it = Item::new(id, category, ts(created), ts(updated));
    it.seller_id = "SELLER1".to_string();
    it.title = format!("Item {id}");
    it.price = Decimal::new(price, 2);
    it
}

/// Deterministic catalog content.
///
/// * `MLA1` then `MLA2`: disjoint, both selectable.
/// * `ML1999`: nested inside `MLA1`, finishes earlier.
/// * `MLA10`, `MLA11`, `MLA12`: category `MLA1005` (root `MLA1000`), where
///   `MLA11` overlaps both neighbours.
/// * `MLA20`: category `MLA5725`, overlaps everything above.
/// * `MLA30`: unknown category, never grouped.
/// * `MLA40`: missing `last_updated`.
pub fn all() -> Vec<Item> {
    vec![
        item(
            "MLA1",
            "MLA1000",
            15_000,
            "2024-11-19T18:00:00.000000-03:00",
            "2024-11-24T18:00:00.000000-03:00",
        ),
        item(
            "MLA2",
            "MLA1000",
            9_990,
            "2024-11-25T00:00:00.000000-03:00",
            "2024-11-30T00:00:00.000000-03:00",
        ),
        item(
            "ML1999",
            "MLA1000",
            4_500,
            "2024-11-20T00:00:00.000000-03:00",
            "2024-11-21T00:00:00.000000-03:00",
        ),
        item(
            "MLA10",
            "MLA1005",
            1_200,
            "2024-10-01T00:00:00.000000-03:00",
            "2024-10-05T00:00:00.000000-03:00",
        ),
        item(
            "MLA11",
            "MLA1005-1",
            1_300,
            "2024-10-04T00:00:00.000000-03:00",
            "2024-10-08T00:00:00.000000-03:00",
        ),
        item(
            "MLA12",
            "MLA1005",
            1_400,
            "2024-10-05T00:00:00.000000-03:00",
            "2024-10-09T00:00:00.000000-03:00",
        ),
        item(
            "MLA20",
            "MLA5725",
            77_700,
            "2024-09-01T00:00:00.000000-03:00",
            "2024-12-31T00:00:00.000000-03:00",
        ),
        item(
            "MLA30",
            "MLA9999",
            100,
            "2024-11-01T00:00:00.000000-03:00",
            "2024-11-02T00:00:00.000000-03:00",
        ),
        item(
            "MLA40",
            "MLA1005",
            100,
            "2024-11-01T00:00:00.000000-03:00",
            "",
        ),
    ]
}
