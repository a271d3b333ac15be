#[path = "../common/mod.rs"]
mod common;

use common::{empty_store, seeded_store};
use foodlink::prelude::*;

#[test]
fn test_numeric_report_charts() {
    let (store, _) = seeded_store();
    let table = store.run_report("quantity_donated_by_provider").unwrap();
    let chart = BarChart::from_table(&table).expect("numeric report should chart");

    assert_eq!(chart.label_column, "Name");
    assert_eq!(
        chart.labels,
        vec!["Green Grocer", "Spice Route", "Mixed Kitchen", "Idle Bakery"]
    );
    assert_eq!(chart.series.len(), 1);
    assert_eq!(chart.series[0].name, "Total_Quantity");
    assert_eq!(chart.series[0].values, vec![15.0, 8.0, 3.0, 2.0]);
}

#[test]
fn test_two_numeric_columns_give_two_series() {
    let (store, _) = seeded_store();
    let table = store.run_report("providers_receivers_per_city").unwrap();
    let chart = BarChart::from_table(&table).unwrap();

    let names: Vec<_> = chart.series.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Providers", "Receivers"]);
}

#[test]
fn test_single_column_report_has_no_chart() {
    let (store, _) = seeded_store();
    let table = store
        .run_report("providers_with_100_percent_successful_claims")
        .unwrap();
    assert!(!table.is_empty());
    assert!(BarChart::from_table(&table).is_none());

    let total = store.run_report("total_food_quantity_available").unwrap();
    assert!(BarChart::from_table(&total).is_none());
}

#[test]
fn test_text_only_report_has_no_chart() {
    let (store, _) = seeded_store();
    let table = store.run_report("contact_providers_in_mumbai").unwrap();
    assert!(!table.is_empty());
    assert!(BarChart::from_table(&table).is_none());
}

#[test]
fn test_empty_report_has_no_chart() {
    let store = empty_store();
    let table = store.run_report("claims_per_food_item").unwrap();
    assert!(BarChart::from_table(&table).is_none());
}

#[test]
fn test_rendered_bars_scale_to_largest_value() {
    let (store, _) = seeded_store();
    let table = store.run_report("top_5_receivers_by_claims").unwrap();
    let rendered = BarChart::from_table(&table).unwrap().to_string();

    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[0], "Total_Claims by Name");
    let bars: Vec<usize> = lines[1..]
        .iter()
        .map(|l| l.chars().filter(|c| *c == '█').count())
        .collect();
    // 3 claims against 2
    assert_eq!(bars, vec![40, 27]);
}
