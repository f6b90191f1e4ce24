//! Partial prepayment what-if
//!
//! An extra lump sum is applied to today's balance and the installment is
//! kept, so the term shortens. A lump at or above the balance settles the debt.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::amortization::AmortizationEngine;
use crate::debt::Debt;

/// Comparison of the remaining schedule with and without the extra payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrepaymentResult {
    pub debt_id: u32,

    /// Lump sum actually applied (capped at the balance)
    pub extra_payment: f64,

    pub balance_before: f64,
    pub balance_after: f64,

    pub installments_before: u32,
    pub installments_after: u32,
    pub installments_saved: u32,

    pub interest_before: f64,
    pub interest_after: f64,
    pub interest_saved: f64,

    /// Cash out over the rest of the contract, lump sum included
    pub total_paid_before: f64,
    pub total_paid_after: f64,

    pub last_due_date_before: Option<NaiveDate>,
    pub last_due_date_after: Option<NaiveDate>,

    /// True when the lump sum settles the debt
    pub full_payoff: bool,
}

/// Simulate an extra payment today. Never fails; a non-positive lump is a no-op.
pub fn simulate_prepayment(engine: &AmortizationEngine, debt: &Debt, extra_payment: f64) -> PrepaymentResult {
    let rate = engine.effective_rate(debt);
    let balance_before = engine.current_balance(debt, rate);
    let remaining = debt.remaining_installments();

    let extra_payment = if extra_payment.is_nan() {
        0.0
    } else {
        extra_payment.clamp(0.0, balance_before)
    };
    let balance_after = (balance_before - extra_payment).max(0.0);

    let before = engine
        .schedule_from(debt, balance_before, debt.paid_installments, remaining, rate)
        .summary();
    let after = engine
        .schedule_from(debt, balance_after, debt.paid_installments, remaining, rate)
        .summary();

    let result = PrepaymentResult {
        debt_id: debt.debt_id,
        extra_payment,
        balance_before,
        balance_after,
        installments_before: before.installments,
        installments_after: after.installments,
        installments_saved: before.installments.saturating_sub(after.installments),
        interest_before: before.total_interest,
        interest_after: after.total_interest,
        interest_saved: (before.total_interest - after.total_interest).max(0.0),
        total_paid_before: before.total_paid,
        total_paid_after: after.total_paid + extra_payment,
        last_due_date_before: before.last_due_date,
        last_due_date_after: after.last_due_date,
        full_payoff: balance_after <= 0.0,
    };

    log::debug!(
        "Debt {}: prepaying {:.2} saves {} installments and {:.2} interest",
        debt.debt_id,
        result.extra_payment,
        result.installments_saved,
        result.interest_saved
    );

    result
}
