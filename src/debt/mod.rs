//! Debt records and CSV intake

mod data;
pub mod loader;

pub use data::Debt;
pub use loader::{load_debts, load_debts_from_reader, load_default_debts};
