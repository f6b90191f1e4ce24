//! Errors raised at the validation boundary
//!
//! The numerical core never fails; these are only produced when turning
//! untrusted input (CLI flags, CSV rows) into a [`Debt`](crate::Debt).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DebtError {
    #[error("{field} must be positive, got {value}")]
    NonPositiveAmount { field: &'static str, value: f64 },

    #[error("total installments must be at least 1")]
    ZeroInstallments,

    #[error("paid installments ({paid}) must be less than total installments ({total})")]
    PaidNotLessThanTotal { paid: u32, total: u32 },

    #[error("invalid due date '{value}', expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: Box<DebtError>,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DebtError>;
