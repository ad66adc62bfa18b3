//! Filtering, aggregation, and report assembly over expense snapshots.

pub mod assemble;
pub mod filter;
pub mod summary;

pub use assemble::{
    build_category_report, build_dashboard, build_owner_report, build_trend_report,
    recent_expenses, CategoryReportEntry, DashboardReport, TrendPoint,
};
pub use filter::{filter_expenses, ExpenseQuery};
pub use summary::{
    summarize, summarize_by_owner, summarize_by_period, Granularity, PeriodKey, Summary,
};
