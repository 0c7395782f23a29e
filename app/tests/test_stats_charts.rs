//! FILENAME: tests/test_stats_charts.rs
//! Integration tests for the statistics panels and chart projections.

mod common;

use common::{materiel, TestHarness};
use console_lib::commands::{
    chart_data, commit_search_term, set_search_field, stats_view, toggle_stats_panel,
};
use engine::{ChartKind, GroupKey, SearchField};

fn scenario_harness() -> TestHarness {
    let harness = TestHarness::new();
    harness.set_records(vec![
        materiel(1, "Laptop", 5, Some("IT"), Some("Comptabilité"), Some("bon")),
        materiel(2, "Scanner", 3, Some("IT"), Some("RH"), Some("moyen")),
        materiel(3, "Bureau", 2, Some("Furniture"), Some("RH"), Some("bon")),
    ]);
    harness
}

#[test]
fn stats_follow_the_documented_scenario() {
    let harness = scenario_harness();
    let stats = stats_view(&harness.state).unwrap();

    assert_eq!(stats.total_records, 3);
    assert_eq!(stats.total_quantity, 10);

    let it = stats.by_category.iter().find(|e| e.label == "IT").unwrap();
    let furniture = stats
        .by_category
        .iter()
        .find(|e| e.label == "Furniture")
        .unwrap();
    assert_eq!(it.quantity, 8);
    assert_eq!(furniture.quantity, 2);
}

#[test]
fn stats_are_computed_over_the_filtered_set() {
    let harness = scenario_harness();
    commit_search_term(&harness.state, "laptop");

    let stats = stats_view(&harness.state).unwrap();
    assert_eq!(stats.total_records, 1);
    assert_eq!(stats.total_quantity, 5);
    assert_eq!(stats.by_category.len(), 1);
    assert_eq!(stats.by_category[0].label, "IT");
}

#[test]
fn zero_quantity_records_count_when_visible() {
    let harness = TestHarness::new();
    harness.set_records(vec![
        materiel(1, "Laptop", 4, Some("IT"), None, None),
        materiel(2, "Chaise", 0, Some("Mobilier"), None, None),
    ]);
    // Id search applies no zero-quantity rule, so both records are in
    // the filtered set; the zero still contributes to the count.
    set_search_field(&harness.state, SearchField::Id);

    let stats = stats_view(&harness.state).unwrap();
    assert_eq!(stats.total_records, 2);
    assert_eq!(stats.total_quantity, 4);
}

#[test]
fn charts_stay_synchronized_with_the_stats() {
    let harness = scenario_harness();
    let stats = stats_view(&harness.state).unwrap();
    let charts = chart_data(&harness.state).unwrap();

    let category_labels: Vec<String> =
        stats.by_category.iter().map(|e| e.label.clone()).collect();
    assert_eq!(charts.category.labels, category_labels);
    let category_values: Vec<u64> = stats.by_category.iter().map(|e| e.quantity).collect();
    assert_eq!(charts.category.values, category_values);

    assert_eq!(charts.category.kind, ChartKind::Pie);
    assert_eq!(charts.service.kind, ChartKind::Bar);
    assert_eq!(charts.state.kind, ChartKind::Doughnut);
}

#[test]
fn charts_recompute_when_the_filter_changes() {
    let harness = scenario_harness();
    let before = chart_data(&harness.state).unwrap();
    assert_eq!(before.category.labels.len(), 2);

    commit_search_term(&harness.state, "bureau");
    let after = chart_data(&harness.state).unwrap();
    assert_eq!(after.category.labels, vec!["Furniture"]);
    assert_eq!(after.category.values, vec![2]);
}

#[test]
fn panel_collapse_state_does_not_affect_computation() {
    let harness = scenario_harness();
    let before = stats_view(&harness.state).unwrap();

    toggle_stats_panel(&harness.state, GroupKey::Category);
    assert!(harness.state.display.lock().unwrap().stats_panels.category);

    let after = stats_view(&harness.state).unwrap();
    assert_eq!(before, after);
}

#[test]
fn fetch_error_blocks_stats_and_charts() {
    let harness = scenario_harness();
    harness.set_fetch_error("Erreur: Erreur serveur");

    assert!(stats_view(&harness.state).is_err());
    assert!(chart_data(&harness.state).is_err());
}
