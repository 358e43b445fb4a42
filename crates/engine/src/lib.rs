use std::collections::HashMap;

use chrono::{NaiveDate, Utc};

pub use error::EngineError;
pub use expense::Expense;

mod error;
mod expense;

type ResultEngine<T> = Result<T, EngineError>;

const DATE_FORMAT: &str = "%Y-%m-%d";

fn parse_date(value: &str) -> ResultEngine<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| EngineError::InvalidDate(value.to_string()))
}

/// The owner of all expense records.
///
/// The engine is a plain synchronous value; the server wraps it in an
/// `Arc<RwLock<Engine>>`. Mutating operations take `&mut self`, so they are
/// only reachable through the write guard, while readers share the read
/// guard. The record map and the id counter are the only mutable state and
/// live behind that single lock.
#[derive(Debug)]
pub struct Engine {
    expenses: HashMap<u64, Expense>,
    next_id: u64,
}

impl Engine {
    /// Return an empty engine. Ids start at 1.
    pub fn new() -> Self {
        Self {
            expenses: HashMap::new(),
            next_id: 1,
        }
    }

    /// Add a new expense.
    ///
    /// `date` must be a `YYYY-MM-DD` calendar date. The date is parsed before
    /// any state changes, so a failed add leaves the map and the id counter
    /// untouched.
    pub fn add_expense(
        &mut self,
        description: &str,
        amount: f64,
        category: &str,
        date: &str,
    ) -> ResultEngine<Expense> {
        let date = parse_date(date)?;

        let expense = Expense::new(self.next_id, description, amount, category, date);
        self.expenses.insert(expense.id, expense.clone());
        self.next_id += 1;

        Ok(expense)
    }

    /// Return the expense with the given id.
    pub fn expense(&self, id: u64) -> ResultEngine<Expense> {
        self.expenses
            .get(&id)
            .cloned()
            .ok_or(EngineError::NotFound(id))
    }

    /// Return all expenses. The order is unspecified.
    pub fn expenses(&self) -> Vec<Expense> {
        self.expenses.values().cloned().collect()
    }

    /// Update an expense in place.
    ///
    /// Only the supplied fields overwrite the record; `None` leaves a field
    /// as it is. A supplied date is parsed before any field is written, so a
    /// failed update leaves the record unmodified. `updated_at` is refreshed
    /// on every successful update, even one that supplies nothing.
    pub fn update_expense(
        &mut self,
        id: u64,
        description: Option<&str>,
        amount: Option<f64>,
        category: Option<&str>,
        date: Option<&str>,
    ) -> ResultEngine<Expense> {
        let expense = self
            .expenses
            .get_mut(&id)
            .ok_or(EngineError::NotFound(id))?;

        let date = match date {
            Some(value) => Some(parse_date(value)?),
            None => None,
        };

        if let Some(description) = description {
            expense.description = description.to_string();
        }
        if let Some(amount) = amount {
            expense.amount = amount;
        }
        if let Some(category) = category {
            expense.category = category.to_string();
        }
        if let Some(date) = date {
            expense.date = date;
        }
        expense.updated_at = Utc::now();

        Ok(expense.clone())
    }

    /// Delete an expense. The id is never handed out again.
    pub fn delete_expense(&mut self, id: u64) -> ResultEngine<()> {
        match self.expenses.remove(&id) {
            Some(_) => Ok(()),
            None => Err(EngineError::NotFound(id)),
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
