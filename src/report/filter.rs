use serde::{Deserialize, Serialize};

use crate::expense::Expense;

/// Predicates applied to an expense snapshot.
///
/// `text` is a case-insensitive substring match against description or
/// category; `category` is an exact match. Supplied predicates combine
/// with logical AND.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExpenseQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ExpenseQuery {
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.category.is_none()
    }

    pub fn matches(&self, expense: &Expense) -> bool {
        if let Some(text) = &self.text {
            let needle = text.to_lowercase();
            let in_description = expense.description.to_lowercase().contains(&needle);
            let in_category = expense.category.to_lowercase().contains(&needle);
            if !in_description && !in_category {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if expense.category != *category {
                return false;
            }
        }
        true
    }
}

/// Returns the subsequence matching every supplied predicate, preserving
/// the snapshot's original order. An empty query returns the input
/// unchanged; empty input yields empty output, never an error.
pub fn filter_expenses(expenses: &[Expense], query: &ExpenseQuery) -> Vec<Expense> {
    if query.is_empty() {
        return expenses.to_vec();
    }
    expenses
        .iter()
        .filter(|expense| query.matches(expense))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::CurrencyCode;
    use chrono::NaiveDate;

    fn expense(id: &str, category: &str, description: &str) -> Expense {
        Expense {
            id: id.into(),
            amount: 10.0,
            category: category.into(),
            date: NaiveDate::from_ymd_opt(2023, 4, 15).unwrap(),
            description: description.into(),
            currency: CurrencyCode::default(),
            owner_name: None,
        }
    }

    #[test]
    fn text_predicate_matches_category_too() {
        let expenses = vec![
            expense("e1", "Transport", "Morning commute"),
            expense("e2", "Food", "Transit snacks"),
        ];
        let query = ExpenseQuery::default().with_text("transport");
        let matched = filter_expenses(&expenses, &query);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "e1");
    }

    #[test]
    fn predicates_combine_with_and() {
        let expenses = vec![
            expense("e1", "Food", "Lunch downtown"),
            expense("e2", "Food", "Groceries"),
            expense("e3", "Transport", "Lunch run taxi"),
        ];
        let query = ExpenseQuery::default()
            .with_text("lunch")
            .with_category("Food");
        let matched = filter_expenses(&expenses, &query);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "e1");
    }
}
