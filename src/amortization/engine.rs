//! Amortization engine: rate solve, schedule and payoff analysis for a debt

use crate::debt::Debt;
use crate::payoff::{self, PayoffCalculationResult, PrepaymentResult, RecommendationConfig};
use super::rate::{solve_effective_rate_detailed, RateSolution, SolverConfig};
use super::schedule::AmortizationSchedule;
use super::state::ScheduleState;

/// Configuration for an engine instance
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Rate solver constants
    pub solver: SolverConfig,

    /// Recommendation score weights and tier thresholds
    pub recommendation: RecommendationConfig,
}

/// Stateless engine; one instance can serve any number of debts and threads
#[derive(Debug, Clone, Default)]
pub struct AmortizationEngine {
    config: EngineConfig,
}

impl AmortizationEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Periodic rate implied by the debt's contract terms
    pub fn effective_rate(&self, debt: &Debt) -> f64 {
        self.rate_solution(debt).rate
    }

    /// Rate with solver diagnostics
    pub fn rate_solution(&self, debt: &Debt) -> RateSolution {
        solve_effective_rate_detailed(
            &self.config.solver,
            debt.financed_amount,
            debt.installment_value,
            debt.total_installments,
        )
    }

    /// Outstanding principal today: the supplied balance, or the balance left
    /// after running `paid_installments` steps from the principal
    pub fn current_balance(&self, debt: &Debt, periodic_rate: f64) -> f64 {
        if let Some(balance) = debt.remaining_balance {
            return balance.max(0.0);
        }

        let mut state = ScheduleState::opening(debt.financed_amount, 0);
        for _ in 0..debt.paid_installments.min(debt.total_installments) {
            if state.is_settled() {
                break;
            }
            state.advance(debt.installment_value, periodic_rate);
        }
        state.balance
    }

    /// Schedule over the whole contract, from the financed amount
    pub fn full_schedule(&self, debt: &Debt) -> AmortizationSchedule {
        let rate = self.effective_rate(debt);
        self.schedule_from(debt, debt.financed_amount, 0, debt.total_installments, rate)
    }

    /// Schedule for the installments still to be paid, from today's balance
    pub fn remaining_schedule(&self, debt: &Debt) -> AmortizationSchedule {
        let rate = self.effective_rate(debt);
        let balance = self.current_balance(debt, rate);
        self.schedule_from(
            debt,
            balance,
            debt.paid_installments,
            debt.remaining_installments(),
            rate,
        )
    }

    /// Drive the step function from `opening_balance` for at most
    /// `installments` periods, numbering rows after `installments_done`
    pub fn schedule_from(
        &self,
        debt: &Debt,
        opening_balance: f64,
        installments_done: u32,
        installments: u32,
        periodic_rate: f64,
    ) -> AmortizationSchedule {
        let mut schedule = AmortizationSchedule::new(debt.debt_id, periodic_rate);
        let mut state = ScheduleState::opening(opening_balance, installments_done);

        for _ in 0..installments {
            if state.is_settled() {
                break;
            }
            let mut row = state.advance(debt.installment_value, periodic_rate);
            // Rounding dust left after the final contractual installment
            if row.installment_number == debt.total_installments {
                state.settle_residual(&mut row, self.config.solver.zero_interest_tolerance);
            }
            row.due_date = debt.due_date(row.installment_number);
            schedule.add_row(row);
        }

        log::debug!(
            "Debt {}: {} rows at rate {:.6}, closing balance {:.2}",
            debt.debt_id,
            schedule.len(),
            periodic_rate,
            state.balance
        );

        schedule
    }

    /// Early-payoff analysis for the debt
    pub fn payoff(&self, debt: &Debt) -> PayoffCalculationResult {
        let rate = self.effective_rate(debt);
        let balance = self.current_balance(debt, rate);
        payoff::calculate_payoff_at(&self.config.recommendation, debt, rate, balance)
    }

    /// What-if for an extra lump-sum payment applied today
    pub fn prepayment(&self, debt: &Debt, extra_payment: f64) -> PrepaymentResult {
        payoff::simulate_prepayment(self, debt, extra_payment)
    }
}
