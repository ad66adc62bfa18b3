use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::currency::CurrencyCode;
use crate::errors::{ExpenseError, Result, SkippedRecord};

/// A single recorded spending event.
///
/// Field names follow the remote API payloads (camelCase on the wire).
/// Records are immutable from the engine's perspective: aggregations
/// receive a snapshot and never mutate it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
    pub currency: CurrencyCode,
    /// Present only in admin-facing aggregations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
}

/// The wire-shaped record as fetched, before validation.
///
/// `amount` tolerates both JSON numbers and numeric strings; `date`
/// stays a string until screening parses it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawExpense {
    pub id: String,
    pub amount: AmountField,
    pub category: String,
    pub date: String,
    #[serde(default)]
    pub description: String,
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountField {
    Number(f64),
    Text(String),
}

impl RawExpense {
    /// Validates the record into an [`Expense`].
    ///
    /// Rejects negative or non-numeric amounts and unparseable dates;
    /// the returned error names the offending record.
    pub fn validate(self) -> Result<Expense> {
        let amount = match &self.amount {
            AmountField::Number(value) if value.is_finite() && *value >= 0.0 => *value,
            AmountField::Number(value) => {
                return Err(ExpenseError::InvalidAmount {
                    id: self.id,
                    raw: value.to_string(),
                })
            }
            AmountField::Text(text) => match text.trim().parse::<f64>() {
                Ok(value) if value.is_finite() && value >= 0.0 => value,
                _ => {
                    return Err(ExpenseError::InvalidAmount {
                        raw: text.clone(),
                        id: self.id,
                    })
                }
            },
        };
        let date = parse_expense_date(&self.date).ok_or_else(|| ExpenseError::UnparseableDate {
            id: self.id.clone(),
            raw: self.date.clone(),
        })?;
        Ok(Expense {
            id: self.id,
            amount,
            category: self.category,
            date,
            description: self.description,
            currency: CurrencyCode::new(self.currency),
            owner_name: self.owner_name,
        })
    }
}

/// Screens a raw snapshot, keeping valid records in their original order
/// and reporting the rejected ones instead of aborting.
pub fn screen(records: Vec<RawExpense>) -> (Vec<Expense>, Vec<SkippedRecord>) {
    let mut kept = Vec::with_capacity(records.len());
    let mut skipped = Vec::new();
    for record in records {
        let id = record.id.clone();
        match record.validate() {
            Ok(expense) => kept.push(expense),
            Err(reason) => {
                tracing::debug!(%id, %reason, "skipping malformed expense record");
                skipped.push(SkippedRecord { id, reason });
            }
        }
    }
    (kept, skipped)
}

/// Accepts `YYYY-MM-DD` and RFC 3339 timestamps (date part taken).
pub fn parse_expense_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(stamp.date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|stamp| stamp.date())
}
