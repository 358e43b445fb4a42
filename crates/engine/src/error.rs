//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`NotFound`] thrown when no expense with the requested id exists.
//! - [`InvalidDate`] thrown when a date string is not a `YYYY-MM-DD` date.
//!
//!  [`NotFound`]: EngineError::NotFound
//!  [`InvalidDate`]: EngineError::InvalidDate
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, PartialEq)]
pub enum EngineError {
    #[error("expense {0} not found")]
    NotFound(u64),
    #[error("invalid date format, use YYYY-MM-DD")]
    InvalidDate(String),
}
