use chrono::{Days, NaiveDate};
use listing_chart::api::ChartEngine;
use listing_chart::core::{
    DayPoint, GraphKind, ListingDataset, latest_day, points_on_or_after, trailing_cutoff,
};
use listing_chart::render::NullRenderer;
use proptest::prelude::*;

fn base_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date")
}

fn offset_day(offset: u64) -> NaiveDate {
    base_day()
        .checked_add_days(Days::new(offset))
        .expect("date in range")
}

fn points_strategy() -> impl Strategy<Value = Vec<DayPoint>> {
    prop::collection::vec((0_u64..365, -1.0e6_f64..1.0e6), 0..50).prop_map(|entries| {
        entries
            .into_iter()
            .map(|(offset, y)| DayPoint::new(offset_day(offset), y))
            .collect()
    })
}

fn is_subsequence(needle: &[DayPoint], haystack: &[DayPoint]) -> bool {
    let mut rest = haystack.iter();
    needle
        .iter()
        .all(|wanted| rest.by_ref().any(|point| point == wanted))
}

proptest! {
    #[test]
    fn filter_keeps_exactly_the_points_inside_the_window(
        points in points_strategy(),
        days in 0_u32..400,
    ) {
        let Some(latest) = latest_day(&points) else { return Ok(()); };
        let cutoff = trailing_cutoff(latest, days);
        let filtered = points_on_or_after(&points, cutoff);

        prop_assert!(filtered.iter().all(|point| point.x >= cutoff));
        prop_assert!(is_subsequence(&filtered, &points));
        prop_assert_eq!(
            filtered.len(),
            points.iter().filter(|point| point.x >= cutoff).count()
        );
    }

    #[test]
    fn wider_windows_are_supersets_of_narrower_ones(
        points in points_strategy(),
        narrow in 0_u32..200,
        extra in 0_u32..200,
    ) {
        let Some(latest) = latest_day(&points) else { return Ok(()); };
        let wide = narrow + extra;

        let narrow_filtered = points_on_or_after(&points, trailing_cutoff(latest, narrow));
        let wide_filtered = points_on_or_after(&points, trailing_cutoff(latest, wide));

        prop_assert!(is_subsequence(&narrow_filtered, &wide_filtered));
        prop_assert!(is_subsequence(&wide_filtered, &points));
    }

    #[test]
    fn full_dataset_survives_arbitrary_operation_sequences(
        sales_rank in points_strategy(),
        buy_box in points_strategy(),
        seller_a in points_strategy(),
        seller_b in points_strategy(),
        ops in prop::collection::vec((0_usize..3, 1_u32..120), 1..10),
    ) {
        let mut dataset = ListingDataset {
            sales_rank,
            buy_box,
            ..ListingDataset::default()
        };
        dataset.inventory.insert("SELLER-A".to_owned(), seller_a);
        dataset.inventory.insert("SELLER-B".to_owned(), seller_b);
        prop_assume!(!dataset.is_empty());

        let snapshot = dataset.clone();
        let mut engine = ChartEngine::new(NullRenderer::default(), dataset)
            .expect("engine init");

        for (kind_index, days) in ops {
            let kind = match kind_index {
                0 => GraphKind::SalesRank,
                1 => GraphKind::BuyBox,
                _ => GraphKind::Inventory,
            };
            engine.select_graph(kind).expect("select graph");
            engine.apply_window(days).expect("apply window");

            // The working copy is always a per-slice subsequence of the
            // snapshot, whatever the operation order was.
            let working = engine.working_dataset();
            prop_assert!(is_subsequence(&working.sales_rank, &snapshot.sales_rank));
            prop_assert!(is_subsequence(&working.buy_box, &snapshot.buy_box));
            for (seller_id, points) in &working.inventory {
                prop_assert!(is_subsequence(points, &snapshot.inventory[seller_id]));
            }
        }

        prop_assert_eq!(engine.full_dataset(), &snapshot);
    }
}
