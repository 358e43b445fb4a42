//! The module contains the `Expense` type, the record the engine stores.
use chrono::{DateTime, NaiveDate, Utc};

/// A single expense record.
///
/// The id is assigned by the engine and never changes or gets reused, even
/// after the record is deleted. `created_at` is fixed at creation;
/// `updated_at` moves forward on every successful update.
#[derive(Clone, Debug, PartialEq)]
pub struct Expense {
    pub id: u64,
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Expense {
    pub(crate) fn new(
        id: u64,
        description: &str,
        amount: f64,
        category: &str,
        date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            description: description.to_string(),
            amount,
            category: category.to_string(),
            date,
            created_at: now,
            updated_at: now,
        }
    }
}
