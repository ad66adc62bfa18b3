use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::currency::CurrencyCode;
use crate::expense::Expense;

/// Label used when grouping by owner and a record has no owner name.
pub const UNKNOWN_OWNER: &str = "Unknown";

/// Time-bucketing unit for trend reporting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Granularity {
    Daily,
    Monthly,
}

impl Granularity {
    /// Buckets a date into its period key.
    ///
    /// Monthly labels are `M/YYYY` without zero-padding, matching the
    /// dashboard series the client renders.
    pub fn bucket(&self, date: NaiveDate) -> PeriodKey {
        match self {
            Granularity::Daily => PeriodKey {
                anchor: date,
                label: date.format("%Y-%m-%d").to_string(),
            },
            Granularity::Monthly => PeriodKey {
                anchor: date.with_day(1).unwrap_or(date),
                label: format!("{}/{}", date.month(), date.year()),
            },
        }
    }
}

/// A period bucket with a sortable anchor date, so trend series order
/// chronologically rather than lexicographically by label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct PeriodKey {
    anchor: NaiveDate,
    label: String,
}

impl PeriodKey {
    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Derived totals for a snapshot of expenses.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Summary {
    /// Sum of all amounts, 0 for empty input.
    pub total: f64,
    /// One entry per category present; absent, never zero-valued.
    pub by_category: BTreeMap<String, f64>,
    /// Distinct currency codes seen in the snapshot.
    pub currencies: BTreeSet<CurrencyCode>,
    /// Advisory: more than one currency was present, so `total` sums raw
    /// amounts across currencies and should not be shown as-is.
    pub mixed_currencies: bool,
    /// Number of records aggregated.
    pub count: usize,
}

impl Summary {
    pub fn empty() -> Self {
        Self {
            total: 0.0,
            by_category: BTreeMap::new(),
            currencies: BTreeSet::new(),
            mixed_currencies: false,
            count: 0,
        }
    }
}

/// Computes totals and the per-category breakdown for a snapshot.
///
/// Amounts are summed left to right with no rounding; rounding happens
/// only at display formatting. Mixed-currency input is summed anyway and
/// flagged, never silently (no conversion is attempted).
pub fn summarize(expenses: &[Expense]) -> Summary {
    let mut summary = Summary::empty();
    for expense in expenses {
        summary.total += expense.amount;
        *summary
            .by_category
            .entry(expense.category.clone())
            .or_insert(0.0) += expense.amount;
        summary.currencies.insert(expense.currency.clone());
        summary.count += 1;
    }
    summary.mixed_currencies = summary.currencies.len() > 1;
    if summary.mixed_currencies {
        tracing::warn!(
            currencies = ?summary.currencies,
            "aggregating expenses across multiple currencies without conversion"
        );
    }
    summary
}

/// Sparse per-period sums: periods with no expenses are absent.
pub fn summarize_by_period(
    expenses: &[Expense],
    granularity: Granularity,
) -> BTreeMap<PeriodKey, f64> {
    let mut totals = BTreeMap::new();
    for expense in expenses {
        *totals
            .entry(granularity.bucket(expense.date))
            .or_insert(0.0) += expense.amount;
    }
    totals
}

/// Per-owner totals for admin views. Records without an owner name are
/// grouped under [`UNKNOWN_OWNER`].
pub fn summarize_by_owner(expenses: &[Expense]) -> BTreeMap<String, f64> {
    let mut totals = BTreeMap::new();
    for expense in expenses {
        let owner = expense
            .owner_name
            .clone()
            .unwrap_or_else(|| UNKNOWN_OWNER.to_string());
        *totals.entry(owner).or_insert(0.0) += expense.amount;
    }
    totals
}
