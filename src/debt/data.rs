//! Debt record for a fixed-installment (Price method) loan

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{DebtError, Result};

/// A single amortizing debt as entered by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debt {
    /// Unique debt identifier
    pub debt_id: u32,

    /// Display name (e.g. "Car loan")
    #[serde(default)]
    pub name: String,

    /// Original principal
    pub financed_amount: f64,

    /// Fixed periodic payment
    pub installment_value: f64,

    /// Contractual term in periods (months)
    pub total_installments: u32,

    /// Periods already paid
    pub paid_installments: u32,

    /// Outstanding principal today, if known.
    /// `None` means it is derived by running the schedule forward.
    #[serde(default)]
    pub remaining_balance: Option<f64>,

    /// Due date of installment 1, used only to date schedule rows
    #[serde(default)]
    pub first_due_date: Option<NaiveDate>,
}

impl Debt {
    /// Create a debt with the five core terms. No validation is performed;
    /// the engine tolerates bad input and [`Debt::validate`] is the gate.
    pub fn new(
        debt_id: u32,
        financed_amount: f64,
        installment_value: f64,
        total_installments: u32,
        paid_installments: u32,
        remaining_balance: Option<f64>,
    ) -> Self {
        Self {
            debt_id,
            name: String::new(),
            financed_amount,
            installment_value,
            total_installments,
            paid_installments,
            remaining_balance,
            first_due_date: None,
        }
    }

    /// Create a debt and validate it in one go
    pub fn try_new(
        debt_id: u32,
        financed_amount: f64,
        installment_value: f64,
        total_installments: u32,
        paid_installments: u32,
        remaining_balance: Option<f64>,
    ) -> Result<Self> {
        let debt = Self::new(
            debt_id,
            financed_amount,
            installment_value,
            total_installments,
            paid_installments,
            remaining_balance,
        );
        debt.validate()?;
        Ok(debt)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_first_due_date(mut self, date: NaiveDate) -> Self {
        self.first_due_date = Some(date);
        self
    }

    /// Reject debts the engine would only answer with defensive defaults
    pub fn validate(&self) -> Result<()> {
        if !(self.financed_amount > 0.0) {
            return Err(DebtError::NonPositiveAmount {
                field: "financed_amount",
                value: self.financed_amount,
            });
        }
        if !(self.installment_value > 0.0) {
            return Err(DebtError::NonPositiveAmount {
                field: "installment_value",
                value: self.installment_value,
            });
        }
        if self.total_installments == 0 {
            return Err(DebtError::ZeroInstallments);
        }
        if self.paid_installments >= self.total_installments {
            return Err(DebtError::PaidNotLessThanTotal {
                paid: self.paid_installments,
                total: self.total_installments,
            });
        }
        if let Some(balance) = self.remaining_balance {
            if !(balance > 0.0) {
                return Err(DebtError::NonPositiveAmount {
                    field: "remaining_balance",
                    value: balance,
                });
            }
        }
        Ok(())
    }

    /// Installments still to be paid (0 if the counts are inconsistent)
    pub fn remaining_installments(&self) -> u32 {
        self.total_installments.saturating_sub(self.paid_installments)
    }

    /// Total contractual payments over the full term
    pub fn total_contract_payments(&self) -> f64 {
        self.installment_value * self.total_installments as f64
    }

    /// Total interest implied by the contract (installments minus principal)
    pub fn total_interest(&self) -> f64 {
        self.total_contract_payments() - self.financed_amount
    }

    /// Due date of a 1-indexed installment, if the first due date is known
    pub fn due_date(&self, installment_number: u32) -> Option<NaiveDate> {
        let first = self.first_due_date?;
        first.checked_add_months(Months::new(installment_number.saturating_sub(1)))
    }
}
