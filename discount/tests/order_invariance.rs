use discount_mock::InMemoryCatalog;
use proptest::prelude::*;
use std::sync::Arc;

use discount::Discount;

const KNOWN: [&str; 8] = [
    "MLA1", "MLA2", "ML1999", "MLA10", "MLA11", "MLA12", "MLA20", "MLA30",
];

fn arb_request() -> impl Strategy<Value = Vec<&'static str>> {
    proptest::collection::vec(proptest::sample::select(KNOWN.to_vec()), 0..12)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn result_depends_only_on_the_id_set(
        request in arb_request(),
        shuffled in arb_request().prop_shuffle(),
    ) {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .unwrap();
        rt.block_on(async {
            let d = Discount::builder()
                .with_gateway(Arc::new(InMemoryCatalog::fixtures()))
                .without_cache()
                .build()
                .unwrap();

            let mut reversed = request.clone();
            reversed.reverse();
            let mut doubled = request.clone();
            doubled.extend(request.iter().copied());

            let a = d.max_non_overlapping(&request).await.unwrap();
            prop_assert_eq!(&a, &d.max_non_overlapping(&reversed).await.unwrap());
            prop_assert_eq!(&a, &d.max_non_overlapping(&doubled).await.unwrap());

            let g = d.max_non_overlapping_by_category(&request).await.unwrap();
            prop_assert_eq!(&g, &d.max_non_overlapping_by_category(&reversed).await.unwrap());

            // Independent draw: shuffling never changes its own answer.
            let mut sorted = shuffled.clone();
            sorted.sort_unstable();
            prop_assert_eq!(
                d.max_non_overlapping(&shuffled).await.unwrap(),
                d.max_non_overlapping(&sorted).await.unwrap()
            );
            Ok(())
        })?;
    }
}
