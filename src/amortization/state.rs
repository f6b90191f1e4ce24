//! Running state while driving a schedule forward

use super::schedule::ScheduleRow;
use super::step::amortization_step;

/// Balance and counters between two installments
#[derive(Debug, Clone)]
pub struct ScheduleState {
    /// Last installment applied (0 before the first)
    pub installment_number: u32,

    /// Outstanding principal after the last installment
    pub balance: f64,

    /// Cumulative interest paid since the state was opened
    pub interest_paid: f64,

    /// Cumulative principal repaid since the state was opened
    pub principal_paid: f64,
}

impl ScheduleState {
    /// Open a state with `installments_done` installments already behind it
    pub fn opening(balance: f64, installments_done: u32) -> Self {
        Self {
            installment_number: installments_done,
            balance: balance.max(0.0),
            interest_paid: 0.0,
            principal_paid: 0.0,
        }
    }

    pub fn is_settled(&self) -> bool {
        self.balance <= 0.0
    }

    /// Apply the next installment and return its row (without a due date)
    pub fn advance(&mut self, installment_value: f64, periodic_rate: f64) -> ScheduleRow {
        self.installment_number += 1;

        let opening_balance = self.balance;
        let step = amortization_step(opening_balance, installment_value, periodic_rate);

        self.balance = step.new_balance;
        self.interest_paid += step.interest;
        self.principal_paid += step.amortization;

        ScheduleRow {
            installment_number: self.installment_number,
            due_date: None,
            opening_balance,
            payment: step.payment(),
            interest: step.interest,
            amortization: step.amortization,
            closing_balance: step.new_balance,
        }
    }

    /// Fold a residual below `tolerance` into `row`, closing the balance at 0.
    /// Returns true if the row was adjusted.
    pub fn settle_residual(&mut self, row: &mut ScheduleRow, tolerance: f64) -> bool {
        let residual = row.closing_balance;
        if !(residual > 0.0 && residual < tolerance) {
            return false;
        }

        row.amortization = row.opening_balance;
        row.payment = row.interest + row.amortization;
        row.closing_balance = 0.0;

        self.principal_paid += residual;
        self.balance = 0.0;
        true
    }
}
