use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExpenseError>;

/// Error type that captures per-record and per-call failures.
///
/// Malformed records are rejected individually and reported via
/// [`SkippedRecord`] lists rather than aborting a whole aggregation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExpenseError {
    #[error("invalid amount {raw:?} on expense {id}")]
    InvalidAmount { id: String, raw: String },
    #[error("unparseable date {raw:?} on expense {id}")]
    UnparseableDate { id: String, raw: String },
    #[error("unsupported currency code: {0}")]
    UnsupportedCurrency(String),
}

/// A record excluded during screening, with the reason it was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub id: String,
    pub reason: ExpenseError,
}
