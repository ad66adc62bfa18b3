use chrono::NaiveDate;
use expense_reports::currency::CurrencyCode;
use expense_reports::expense::Expense;

pub fn expense(id: &str, amount: f64, category: &str, date: &str, description: &str) -> Expense {
    Expense {
        id: id.into(),
        amount,
        category: category.into(),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("fixture date"),
        description: description.into(),
        currency: CurrencyCode::new("USD"),
        owner_name: None,
    }
}

/// The three-record April 2023 snapshot used across the suites.
pub fn april_snapshot() -> Vec<Expense> {
    vec![
        expense("e1", 85.75, "Food", "2023-04-15", "Groceries"),
        expense("e2", 24.50, "Transport", "2023-04-14", "Uber Ride"),
        expense("e3", 32.00, "Entertainment", "2023-04-12", "Cinema tickets"),
    ]
}
