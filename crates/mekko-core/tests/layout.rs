// File: crates/mekko-core/tests/layout.rs
// Purpose: Engine output: widths, stacked heights, labels, ordering and missing combinations.

use mekko_core::{compute, Category, Dataset, Field, LayoutSpec, SortPolicy, TotalPolicy};

const EPS: f64 = 1e-9;

fn row(x: &str, y: &str, v: f64) -> Vec<Field> {
    vec![x.into(), y.into(), v.into()]
}

fn cats(names: &[&str]) -> Vec<Category> {
    names.iter().map(|&n| Category::from(n)).collect()
}

fn regions() -> Dataset {
    Dataset::new(["region", "kind", "amount"])
        .with_row(row("R1", "new", 100.0))
        .with_row(row("R1", "other", 50.0))
        .with_row(row("R2", "new", 200.0))
}

/// Several regions, an unlisted y value, repeated rows per cell.
fn market() -> Dataset {
    let mut ds = Dataset::new(["market_area", "movement", "net_movement", "note"]);
    for (x, y, v) in [
        ("UK", "01. New Customers", 12_500.0),
        ("UK", "05. Increased Units", 4_000.0),
        ("UK", "01. New Customers", 2_500.0),
        ("GER", "01. New Customers", 30_000.0),
        ("GER", "03. Added Segments", 7_500.0),
        ("FRA", "05. Increased Units", 9_000.0),
        ("FRA", "99. Unlisted", 1_000.0),
        ("BEN", "03. Added Segments", 3_000.0),
    ] {
        ds.push_row(vec![x.into(), y.into(), v.into(), "passthrough".into()]);
    }
    ds
}

fn market_spec() -> LayoutSpec {
    LayoutSpec::new(
        "market_area",
        "movement",
        "net_movement",
        cats(&["05. Increased Units", "03. Added Segments", "01. New Customers"]),
    )
}

#[test]
fn two_region_scenario() {
    let spec = LayoutSpec::new("region", "kind", "amount", cats(&["new", "other"])).with_display_divisor(1.0);
    let out = spec.compute(&regions()).expect("layout");

    assert_eq!(out.x_labels, cats(&["R1", "R2"]));
    assert_eq!(out.totals, vec![150.0, 200.0]);
    assert!((out.widths[0] - 150.0 / 350.0).abs() < EPS);
    assert!((out.widths[1] - 200.0 / 350.0).abs() < EPS);

    let new = out.heights(&"new".into()).unwrap();
    assert!((new[0] - 100.0 / 150.0).abs() < EPS);
    assert!((new[1] - 1.0).abs() < EPS);
    let other = out.heights(&"other".into()).unwrap();
    assert!((other[0] - 50.0 / 150.0).abs() < EPS);
    assert_eq!(other[1], 0.0);

    assert_eq!(out.labels(&"new".into()).unwrap(), &[100.0, 200.0]);
    assert_eq!(out.labels(&"other".into()).unwrap(), &[50.0, 0.0]);
}

#[test]
fn widths_sum_to_one_and_series_align() {
    let out = market_spec().compute(&market()).unwrap();
    let sum: f64 = out.widths.iter().sum();
    assert!((sum - 1.0).abs() < EPS, "widths sum {sum}");
    assert!(out.widths.iter().all(|&w| w >= 0.0));
    for s in &out.series {
        assert_eq!(s.heights.len(), out.len());
        assert_eq!(s.labels.len(), out.len());
        assert_eq!(s.subtotals.len(), out.len());
    }
}

#[test]
fn exhaustive_list_fills_every_stack() {
    let spec = LayoutSpec::new("region", "kind", "amount", cats(&["new", "other"]));
    let out = spec.compute(&regions()).unwrap();
    for x in 0..out.len() {
        assert!((out.stack_total(x) - 1.0).abs() < EPS);
    }
}

#[test]
fn unlisted_y_values_leave_short_stacks_by_default() {
    let out = market_spec().compute(&market()).unwrap();
    let fra = out.x_labels.iter().position(|c| c == &Category::from("FRA")).unwrap();
    // FRA total includes the unlisted 1000, so its stack stops at 0.9.
    assert_eq!(out.totals[fra], 10_000.0);
    assert!((out.stack_total(fra) - 0.9).abs() < EPS);
}

#[test]
fn listed_total_policy_drops_unlisted_records() {
    let out = market_spec()
        .with_total_policy(TotalPolicy::ListedCategories)
        .compute(&market())
        .unwrap();
    let fra = out.x_labels.iter().position(|c| c == &Category::from("FRA")).unwrap();
    assert_eq!(out.totals[fra], 9_000.0);
    for x in 0..out.len() {
        assert!((out.stack_total(x) - 1.0).abs() < EPS);
    }
}

#[test]
fn missing_combination_is_an_explicit_zero() {
    let ds = Dataset::new(["x", "y", "v"]).with_row(row("A", "y1", 10.0)).with_row(row("B", "y2", 5.0));
    let out = LayoutSpec::new("x", "y", "v", cats(&["y1", "y2"])).compute(&ds).unwrap();
    assert_eq!(out.subtotals(&"y2".into()).unwrap()[0], 0.0);
    assert_eq!(out.heights(&"y2".into()).unwrap()[0], 0.0);
    assert_eq!(out.heights(&"y1".into()).unwrap()[1], 0.0);
}

#[test]
fn sort_by_category_is_ascending() {
    let out = market_spec().compute(&market()).unwrap();
    assert_eq!(out.x_labels, cats(&["BEN", "FRA", "GER", "UK"]));
    assert!(out.x_labels.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn sort_by_total_is_descending_with_key_tiebreak() {
    let mut ds = market();
    // Tie BEN with FRA at 10_000.
    ds.push_row(vec!["BEN".into(), "01. New Customers".into(), 7_000.0.into(), Field::Null]);
    let out = market_spec().with_sort(SortPolicy::ByTotalValueDesc).compute(&ds).unwrap();
    assert_eq!(out.x_labels, cats(&["GER", "UK", "BEN", "FRA"]));
    assert!(out.widths.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn missing_x_category_sorts_first_under_both_policies() {
    let ds = Dataset::new(["x", "y", "v"])
        .with_row(row("B", "y1", 1.0))
        .with_row(vec![Field::Null, "y1".into(), 2.0.into()])
        .with_row(row("A", "y1", 5.0));
    let spec = LayoutSpec::new("x", "y", "v", cats(&["y1"]));

    let by_key = spec.compute(&ds).unwrap();
    assert_eq!(by_key.x_labels, vec![Category::Missing, "A".into(), "B".into()]);

    let by_total = spec.with_sort(SortPolicy::ByTotalValueDesc).compute(&ds).unwrap();
    assert_eq!(by_total.x_labels, vec![Category::Missing, "A".into(), "B".into()]);
}

#[test]
fn numeric_categories_order_numerically() {
    let ds = Dataset::new(["year", "y", "v"])
        .with_row(vec![Field::infer("2021"), "a".into(), 1.0.into()])
        .with_row(vec![Field::infer("9"), "a".into(), 1.0.into()])
        .with_row(vec![Field::infer("10"), "a".into(), 1.0.into()]);
    let out = LayoutSpec::new("year", "y", "v", cats(&["a"])).compute(&ds).unwrap();
    let shown: Vec<String> = out.x_labels.iter().map(ToString::to_string).collect();
    assert_eq!(shown, ["9", "10", "2021"]);
}

#[test]
fn labels_scale_by_divisor_and_round_half_even() {
    let ds = Dataset::new(["x", "y", "v"])
        .with_row(row("A", "k", 2_500.0))
        .with_row(row("B", "k", 3_500.0))
        .with_row(row("C", "k", 1_499.0));
    let out = LayoutSpec::new("x", "y", "v", cats(&["k"])).compute(&ds).unwrap();
    assert_eq!(out.labels(&"k".into()).unwrap(), &[2.0, 4.0, 1.0]);
    assert_eq!(out.series[0].label_text(0).as_deref(), Some("2"));
}

#[test]
fn null_values_are_skipped() {
    let ds = Dataset::new(["x", "y", "v"])
        .with_row(row("A", "k", 4.0))
        .with_row(vec!["A".into(), "k".into(), Field::Null])
        .with_row(vec!["A".into(), "k".into(), f64::NAN.into()]);
    let out = LayoutSpec::new("x", "y", "v", cats(&["k"])).compute(&ds).unwrap();
    assert_eq!(out.totals, vec![4.0]);
}

#[test]
fn compute_is_idempotent() {
    let spec = market_spec().with_sort(SortPolicy::ByTotalValueDesc);
    let ds = market();
    assert_eq!(spec.compute(&ds).unwrap(), spec.compute(&ds).unwrap());
}

#[test]
fn aggregate_exposes_ordered_sums() {
    let aggs = market_spec().aggregate(&market()).unwrap();
    let uk = aggs.iter().find(|a| a.category == Category::from("UK")).unwrap();
    assert_eq!(uk.total, 19_000.0);
    assert_eq!(uk.subtotals, vec![4_000.0, 0.0, 15_000.0]);
}

#[test]
fn one_call_compute_matches_builder_defaults() {
    let ys = cats(&["new", "other"]);
    let a = compute(&regions(), "region", "kind", "amount", &ys, SortPolicy::ByXCategory).unwrap();
    let b = LayoutSpec::new("region", "kind", "amount", ys).compute(&regions()).unwrap();
    assert_eq!(a, b);
    // Default divisor shows thousands.
    assert_eq!(a.labels(&"new".into()).unwrap(), &[0.0, 0.0]);
}

#[test]
fn geometry_helpers_follow_widths() {
    let out = LayoutSpec::new("region", "kind", "amount", cats(&["new", "other"])).compute(&regions()).unwrap();
    let offsets = out.offsets();
    assert_eq!(offsets[0], 0.0);
    assert!((offsets[1] - out.widths[0]).abs() < EPS);
    let ticks = out.tick_positions();
    assert!((ticks[1] - (out.widths[0] + out.widths[1] / 2.0)).abs() < EPS);
    assert_eq!(out.y_categories().cloned().collect::<Vec<_>>(), cats(&["new", "other"]));
}

#[test]
fn signed_zero_keys_share_one_bar() {
    let ds = Dataset::new(["code", "y", "v"])
        .with_row(vec![Field::infer("0"), "a".into(), 2.0.into()])
        .with_row(vec![Field::infer("-0"), "a".into(), 3.0.into()])
        .with_row(vec![Field::infer("1"), "a".into(), 5.0.into()]);
    let out = LayoutSpec::new("code", "y", "v", cats(&["a"])).compute(&ds).unwrap();
    assert_eq!(out.x_labels, vec![Category::Number(0.0), Category::Number(1.0)]);
    assert_eq!(out.totals, vec![5.0, 5.0]);
    assert_eq!(Category::Number(-0.0), Category::number(0.0));
}
