//! Payoff calculation: cost of settling today versus finishing the schedule

use serde::{Deserialize, Serialize};

use crate::amortization::{annualize_rate, AmortizationEngine, EngineConfig};
use crate::debt::Debt;
use super::recommendation::{recommendation_score, Recommendation, RecommendationConfig};

/// Early-payoff analysis for one debt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoffCalculationResult {
    pub debt_id: u32,

    /// Cost of settling today (the outstanding balance)
    pub current_payoff_amount: f64,

    /// Undiscounted sum of the remaining installments
    pub total_future_payments: f64,

    /// `total_future_payments - current_payoff_amount`.
    /// Nominal difference, not discounted for time value.
    pub interest_savings: f64,

    pub remaining_installments: u32,

    /// Periodic rate as a decimal
    pub monthly_interest_rate: f64,

    /// Compounded annual rate in percent
    pub annual_interest_rate: f64,

    /// Full contractual cost (principal plus contract interest)
    pub total_debt_with_interest: f64,

    /// Principal only
    pub total_debt_without_interest: f64,

    /// 0-100, higher favours paying off now
    pub recommendation_score: f64,

    pub recommendation: Recommendation,

    pub is_recommended: bool,
}

/// Payoff analysis with the default engine settings
pub fn calculate_payoff(debt: &Debt) -> PayoffCalculationResult {
    AmortizationEngine::default().payoff(debt)
}

/// Payoff analysis with explicit engine settings
pub fn calculate_payoff_with(config: &EngineConfig, debt: &Debt) -> PayoffCalculationResult {
    AmortizationEngine::new(config.clone()).payoff(debt)
}

/// Payoff analysis from an already solved rate and current balance. Never fails.
pub fn calculate_payoff_at(
    config: &RecommendationConfig,
    debt: &Debt,
    monthly_rate: f64,
    current_balance: f64,
) -> PayoffCalculationResult {
    let remaining_installments = debt.remaining_installments();
    let annual_interest_rate = annualize_rate(monthly_rate) * 100.0;
    let total_debt_without_interest = debt.financed_amount;
    let total_debt_with_interest = debt.financed_amount + debt.total_interest();

    // Nothing left to pay: settled debt, nothing to save
    if remaining_installments == 0 {
        return PayoffCalculationResult {
            debt_id: debt.debt_id,
            current_payoff_amount: 0.0,
            total_future_payments: 0.0,
            interest_savings: 0.0,
            remaining_installments,
            monthly_interest_rate: monthly_rate,
            annual_interest_rate,
            total_debt_with_interest,
            total_debt_without_interest,
            recommendation_score: 0.0,
            recommendation: Recommendation::NotWorthIt,
            is_recommended: false,
        };
    }

    let current_payoff_amount = current_balance;
    let total_future_payments = debt.installment_value * remaining_installments as f64;
    let interest_savings = total_future_payments - current_payoff_amount;

    let score = recommendation_score(config, interest_savings, current_payoff_amount, annual_interest_rate);
    let recommendation = Recommendation::from_score(score, config);

    PayoffCalculationResult {
        debt_id: debt.debt_id,
        current_payoff_amount,
        total_future_payments,
        interest_savings,
        remaining_installments,
        monthly_interest_rate: monthly_rate,
        annual_interest_rate,
        total_debt_with_interest,
        total_debt_without_interest,
        recommendation_score: score,
        recommendation,
        is_recommended: score >= config.consider_threshold,
    }
}
