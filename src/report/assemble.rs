use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::Serialize;

use crate::expense::Expense;

use super::summary::{
    summarize, summarize_by_owner, summarize_by_period, Granularity, PeriodKey, Summary,
};

/// A legend entry for pie and bar chart series.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryReportEntry {
    pub label: String,
    pub amount: f64,
    pub percent_of_total: f64,
}

/// One point of a trend series.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TrendPoint {
    pub period: PeriodKey,
    pub amount: f64,
}

/// Per-category chart series with share-of-total percentages.
///
/// Entries come in descending amount order, ties broken by ascending
/// label. A zero total yields zero percentages, never NaN.
pub fn build_category_report(expenses: &[Expense]) -> Vec<CategoryReportEntry> {
    let summary = summarize(expenses);
    assemble_entries(summary.by_category, summary.total)
}

/// Per-owner chart series for the admin dashboard, same shape and
/// ordering rules as the category report.
pub fn build_owner_report(expenses: &[Expense]) -> Vec<CategoryReportEntry> {
    let totals = summarize_by_owner(expenses);
    let total: f64 = totals.values().sum();
    assemble_entries(totals, total)
}

fn assemble_entries(totals: BTreeMap<String, f64>, total: f64) -> Vec<CategoryReportEntry> {
    let mut entries: Vec<CategoryReportEntry> = totals
        .into_iter()
        .map(|(label, amount)| CategoryReportEntry {
            label,
            amount,
            percent_of_total: if total > 0.0 {
                amount / total * 100.0
            } else {
                0.0
            },
        })
        .collect();
    entries.sort_by(|a, b| {
        b.amount
            .partial_cmp(&a.amount)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.label.cmp(&b.label))
    });
    entries
}

/// Chronological per-period series, sparse: only periods with expenses
/// appear.
pub fn build_trend_report(expenses: &[Expense], granularity: Granularity) -> Vec<TrendPoint> {
    summarize_by_period(expenses, granularity)
        .into_iter()
        .map(|(period, amount)| TrendPoint { period, amount })
        .collect()
}

/// The most recent `limit` expenses, newest first. Records sharing a
/// date keep their snapshot order.
pub fn recent_expenses(expenses: &[Expense], limit: usize) -> Vec<Expense> {
    let mut recent = expenses.to_vec();
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent.truncate(limit);
    recent
}

/// Everything a dashboard refresh renders, assembled in one pass over
/// the snapshot.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardReport {
    pub summary: Summary,
    pub categories: Vec<CategoryReportEntry>,
    pub trend: Vec<TrendPoint>,
    pub recent: Vec<Expense>,
}

pub fn build_dashboard(
    expenses: &[Expense],
    granularity: Granularity,
    recent_limit: usize,
) -> DashboardReport {
    DashboardReport {
        summary: summarize(expenses),
        categories: build_category_report(expenses),
        trend: build_trend_report(expenses, granularity),
        recent: recent_expenses(expenses, recent_limit),
    }
}
