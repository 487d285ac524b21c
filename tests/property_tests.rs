//! Property-based tests for productdash using proptest
//!
//! These tests generate random product tables to check the invariants of
//! the brand aggregate, the correlation matrix and the chart builder.

use proptest::prelude::*;
use std::collections::BTreeMap;

use productdash::charts::{BrandAggregate, ChartSeries, ChartSettings, build_charts};
use productdash::data::{Column, ProductRecord, ProductTable};
use productdash::stats::correlation_matrix;

/// Brand totals with cents, spanning several orders of magnitude
fn totals_strategy() -> impl Strategy<Value = BTreeMap<String, f64>> {
    let quantity = prop_oneof![
        (0u32..10_000).prop_map(f64::from),
        (0u64..1_000_000_000_000).prop_map(|cents| cents as f64 / 100.0),
    ];
    prop::collection::btree_map("[A-Z][a-z]{0,6}", quantity, 0..20)
}

fn record_strategy() -> impl Strategy<Value = ProductRecord> {
    (
        1.0f64..5000.0,
        0.0f64..5.0,
        0u64..100_000,
        0.0f64..90.0,
        (0u32..5000).prop_map(f64::from),
        prop_oneof![Just("Acme"), Just("Umbrella"), Just("Initech"), Just("Tiny")],
    )
        .prop_map(
            |(price, rating, review_count, discount, quantity_sold_code, brand)| ProductRecord {
                price,
                rating,
                review_count,
                discount,
                quantity_sold_code,
                brand: brand.to_string(),
            },
        )
}

fn table_strategy() -> impl Strategy<Value = ProductTable> {
    prop::collection::vec(record_strategy(), 0..60).prop_map(ProductTable::new)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_aggregate_preserves_grand_total(totals in totals_strategy(), share in 0.001f64..0.5) {
        let expected: f64 = totals.values().sum();
        let aggregate = BrandAggregate::from_totals(totals, share);

        prop_assert_eq!(aggregate.quantities().iter().sum::<f64>(), aggregate.grand_total());
        prop_assert!((aggregate.grand_total() - expected).abs() <= expected.abs() * 1e-12);
    }

    #[test]
    fn test_aggregate_threshold_law(totals in totals_strategy(), share in 0.001f64..0.5) {
        let aggregate = BrandAggregate::from_totals(totals.clone(), share);
        let threshold = share * totals.values().sum::<f64>();

        for entry in aggregate.entries().iter().filter(|e| !e.is_others) {
            prop_assert!(entry.quantity >= threshold);
            prop_assert_eq!(totals.get(&entry.brand), Some(&entry.quantity));
        }

        let folded: f64 = totals.values().filter(|q| **q < threshold).sum();
        prop_assert_eq!(aggregate.others().is_some(), folded != 0.0);
        if let Some(others) = aggregate.others() {
            prop_assert_eq!(others, folded);
            prop_assert!(aggregate.entries().last().is_some_and(|e| e.is_others));
        }
    }

    #[test]
    fn test_aggregate_kept_brands_are_sorted(totals in totals_strategy()) {
        let aggregate = BrandAggregate::from_totals(totals, 0.02);
        let kept: Vec<String> = aggregate
            .entries()
            .iter()
            .filter(|e| !e.is_others)
            .map(|e| e.brand.clone())
            .collect();
        let mut sorted = kept.clone();
        sorted.sort();
        prop_assert_eq!(kept, sorted);
    }

    #[test]
    fn test_correlation_matrix_is_symmetric(table in table_strategy()) {
        let columns: Vec<Vec<f64>> = Column::CORRELATED
            .iter()
            .filter_map(|c| table.numeric_column(*c))
            .collect();
        let matrix = correlation_matrix(&columns);

        prop_assert_eq!(matrix.len(), 5);
        for i in 0..5 {
            prop_assert_eq!(matrix[i].len(), 5);
            let diagonal = matrix[i][i];
            prop_assert!(diagonal.is_nan() || diagonal == 1.0);
            for j in 0..5 {
                let (a, b) = (matrix[i][j], matrix[j][i]);
                prop_assert!((a.is_nan() && b.is_nan()) || a == b);
                prop_assert!(a.is_nan() || (-1.0..=1.0).contains(&a));
            }
        }
    }

    #[test]
    fn test_builder_always_returns_seven_charts(table in table_strategy(), bins in 1usize..100) {
        let settings = ChartSettings {
            histogram_bins: bins,
            ..ChartSettings::default()
        };
        let charts = build_charts(&table, &settings);

        prop_assert_eq!(charts.len(), 7);
        match &charts[0].series {
            ChartSeries::Histogram { bins: hist, .. } => {
                let counted: usize = hist.iter().map(|b| b.count).sum();
                prop_assert_eq!(counted, table.len());
                if !table.is_empty() {
                    prop_assert_eq!(hist.len(), bins);
                }
            }
            other => prop_assert!(false, "first chart is not a histogram: {:?}", other.kind()),
        }
    }

    #[test]
    fn test_bar_and_pie_share_the_aggregate(table in table_strategy()) {
        let charts = build_charts(&table, &ChartSettings::default());
        match (&charts[3].series, &charts[4].series) {
            (
                ChartSeries::Bar { categories, values, .. },
                ChartSeries::Pie { labels, values: slices, .. },
            ) => {
                prop_assert_eq!(categories, labels);
                prop_assert_eq!(values, slices);
            }
            _ => prop_assert!(false, "charts 4 and 5 must be bar and pie"),
        }
    }
}
