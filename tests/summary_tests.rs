mod common;

use common::{april_snapshot, expense};
use expense_reports::currency::CurrencyCode;
use expense_reports::report::{summarize, summarize_by_owner, summarize_by_period, Granularity};

const TOLERANCE: f64 = 1e-9;

#[test]
fn total_matches_concrete_snapshot() {
    let summary = summarize(&april_snapshot());
    assert!((summary.total - 142.25).abs() < TOLERANCE);
    assert_eq!(summary.count, 3);
    assert!(!summary.mixed_currencies);

    assert_eq!(summary.by_category.len(), 3);
    assert!((summary.by_category["Food"] - 85.75).abs() < TOLERANCE);
    assert!((summary.by_category["Transport"] - 24.50).abs() < TOLERANCE);
    assert!((summary.by_category["Entertainment"] - 32.00).abs() < TOLERANCE);
}

#[test]
fn empty_input_yields_empty_summary() {
    let summary = summarize(&[]);
    assert_eq!(summary.total, 0.0);
    assert!(summary.by_category.is_empty());
    assert!(summary.currencies.is_empty());
    assert!(!summary.mixed_currencies);
    assert_eq!(summary.count, 0);
}

#[test]
fn category_sums_partition_the_total() {
    let mut expenses = april_snapshot();
    expenses.push(expense("e4", 7.77, "Food", "2023-03-02", "Snacks"));
    expenses.push(expense("e5", 0.0, "Misc", "2023-03-03", "Freebie"));

    let summary = summarize(&expenses);
    let partitioned: f64 = summary.by_category.values().sum();
    assert!((partitioned - summary.total).abs() < TOLERANCE);
}

#[test]
fn total_is_order_independent() {
    let forward = april_snapshot();
    let mut reversed = april_snapshot();
    reversed.reverse();

    let a = summarize(&forward);
    let b = summarize(&reversed);
    assert!((a.total - b.total).abs() < TOLERANCE);
    assert_eq!(a.by_category, b.by_category);
}

#[test]
fn mixed_currencies_are_flagged_not_rejected() {
    let mut expenses = april_snapshot();
    let mut euro = expense("e4", 10.0, "Food", "2023-04-16", "Brussels lunch");
    euro.currency = CurrencyCode::new("EUR");
    expenses.push(euro);

    let summary = summarize(&expenses);
    assert!(summary.mixed_currencies);
    assert_eq!(summary.currencies.len(), 2);
    assert!((summary.total - 152.25).abs() < TOLERANCE);
}

#[test]
fn monthly_periods_are_sparse() {
    let expenses = vec![
        expense("e1", 10.0, "Food", "2023-01-10", "January"),
        expense("e2", 20.0, "Food", "2023-01-20", "January again"),
        expense("e3", 30.0, "Food", "2023-04-05", "April"),
    ];
    let by_month = summarize_by_period(&expenses, Granularity::Monthly);
    assert_eq!(by_month.len(), 2);

    let labels: Vec<&str> = by_month.keys().map(|k| k.label()).collect();
    assert_eq!(labels, vec!["1/2023", "4/2023"]);

    let amounts: Vec<f64> = by_month.values().copied().collect();
    assert!((amounts[0] - 30.0).abs() < TOLERANCE);
    assert!((amounts[1] - 30.0).abs() < TOLERANCE);
}

#[test]
fn daily_periods_bucket_by_calendar_date() {
    let expenses = vec![
        expense("e1", 5.0, "Food", "2023-04-15", "Breakfast"),
        expense("e2", 6.0, "Food", "2023-04-15", "Lunch"),
        expense("e3", 7.0, "Food", "2023-04-16", "Dinner"),
    ];
    let by_day = summarize_by_period(&expenses, Granularity::Daily);
    assert_eq!(by_day.len(), 2);
    let labels: Vec<&str> = by_day.keys().map(|k| k.label()).collect();
    assert_eq!(labels, vec!["2023-04-15", "2023-04-16"]);
}

#[test]
fn owner_totals_group_missing_names_under_unknown() {
    let mut expenses = april_snapshot();
    expenses[0].owner_name = Some("Alice Smith".into());
    expenses[1].owner_name = Some("Alice Smith".into());

    let by_owner = summarize_by_owner(&expenses);
    assert_eq!(by_owner.len(), 2);
    assert!((by_owner["Alice Smith"] - 110.25).abs() < TOLERANCE);
    assert!((by_owner["Unknown"] - 32.00).abs() < TOLERANCE);
}
