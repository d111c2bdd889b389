//! Form and query definitions backing the sales routes.

use thiserror::Error;

pub mod sales_query;
pub mod settings;

#[derive(Debug, Error, PartialEq)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("Please fill in all password fields.")]
    MissingPasswordFields,

    #[error("New password and confirmation password do not match.")]
    PasswordMismatch,

    #[error("New password must be at least 6 characters long.")]
    PasswordTooShort,

    #[error("New password must be different from current password.")]
    PasswordUnchanged,

    #[error("Please select both source and destination rep.")]
    MissingRep,

    #[error("Source and destination reps cannot be the same.")]
    SameRep,

    #[error("malformed query: {0}")]
    Query(String),

    #[error("unknown payment status: {0}")]
    InvalidStatus(String),

    #[error("unknown time range: {0}")]
    InvalidRange(String),

    #[error("invalid date {0}, expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("custom range needs both `from` and `to`")]
    IncompleteRange,

    #[error("range start {from} is after its end {to}")]
    InvertedRange { from: String, to: String },
}
