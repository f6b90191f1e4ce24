//! Batch payoff analysis across a user's debts
//!
//! Every debt is independent, so the batch is evaluated in parallel and then
//! ranked by how strongly early payoff is favoured.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::amortization::{AmortizationEngine, EngineConfig};
use crate::debt::Debt;
use crate::payoff::PayoffCalculationResult;

/// Portfolio-level totals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub debt_count: usize,
    pub recommended_count: usize,
    /// Sum of today's payoff amounts
    pub total_outstanding: f64,
    /// Sum of the remaining installments
    pub total_future_payments: f64,
    /// Sum of positive interest savings
    pub total_potential_savings: f64,
    /// Monthly cash committed to installments still running
    pub total_monthly_installments: f64,
}

/// Ranked results plus totals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioReport {
    /// Highest score first
    pub results: Vec<PayoffCalculationResult>,
    pub summary: PortfolioSummary,
}

impl PortfolioReport {
    /// Debts whose payoff is recommended, in rank order
    pub fn recommended(&self) -> impl Iterator<Item = &PayoffCalculationResult> {
        self.results.iter().filter(|r| r.is_recommended)
    }
}

/// Runs one engine over many debts
#[derive(Debug, Clone, Default)]
pub struct PortfolioRunner {
    engine: AmortizationEngine,
}

impl PortfolioRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            engine: AmortizationEngine::new(config),
        }
    }

    pub fn engine(&self) -> &AmortizationEngine {
        &self.engine
    }

    /// Payoff analysis for every debt, in input order
    pub fn run_batch(&self, debts: &[Debt]) -> Vec<PayoffCalculationResult> {
        debts.par_iter().map(|d| self.engine.payoff(d)).collect()
    }

    /// Ranked analysis with totals
    pub fn run(&self, debts: &[Debt]) -> PortfolioReport {
        let mut results = self.run_batch(debts);
        rank(&mut results);

        let summary = summarize(debts, &results);
        log::info!(
            "Analyzed {} debts: {} recommended for payoff, {:.2} potential savings",
            summary.debt_count,
            summary.recommended_count,
            summary.total_potential_savings
        );

        PortfolioReport { results, summary }
    }
}

/// Score descending, then savings descending, then debt ID
fn rank(results: &mut [PayoffCalculationResult]) {
    results.sort_by(|a, b| {
        b.recommendation_score
            .total_cmp(&a.recommendation_score)
            .then(b.interest_savings.total_cmp(&a.interest_savings))
            .then(a.debt_id.cmp(&b.debt_id))
    });
}

fn summarize(debts: &[Debt], results: &[PayoffCalculationResult]) -> PortfolioSummary {
    let total_monthly_installments = debts
        .iter()
        .filter(|d| d.remaining_installments() > 0)
        .map(|d| d.installment_value)
        .sum();

    PortfolioSummary {
        debt_count: results.len(),
        recommended_count: results.iter().filter(|r| r.is_recommended).count(),
        total_outstanding: results.iter().map(|r| r.current_payoff_amount).sum(),
        total_future_payments: results.iter().map(|r| r.total_future_payments).sum(),
        total_potential_savings: results.iter().map(|r| r.interest_savings.max(0.0)).sum(),
        total_monthly_installments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn debts() -> Vec<Debt> {
        vec![
            // Interest free store credit
            Debt::new(1, 1_200.0, 100.0, 12, 6, None),
            // Expensive personal loan
            Debt::new(2, 20_000.0, 1_883.02, 12, 3, Some(15_000.0)),
            // Cheap long mortgage
            Debt::new(3, 200_000.0, 1_500.0, 360, 120, None),
            // Already paid off
            Debt::new(4, 1_000.0, 100.0, 10, 10, None),
        ]
    }

    #[test]
    fn test_batch_preserves_order() {
        let runner = PortfolioRunner::new();
        let results = runner.run_batch(&debts());
        let ids: Vec<u32> = results.iter().map(|r| r.debt_id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_run_ranks_by_score() {
        let runner = PortfolioRunner::new();
        let report = runner.run(&debts());

        assert_eq!(report.results[0].debt_id, 2);
        for pair in report.results.windows(2) {
            assert!(pair[0].recommendation_score >= pair[1].recommendation_score);
        }

        let recommended: Vec<u32> = report.recommended().map(|r| r.debt_id).collect();
        assert!(recommended.contains(&2));
        assert!(!recommended.contains(&1));
        assert!(!recommended.contains(&4));
    }

    #[test]
    fn test_summary_totals() {
        let runner = PortfolioRunner::new();
        let report = runner.run(&debts());
        let summary = &report.summary;

        assert_eq!(summary.debt_count, 4);
        let expected_outstanding: f64 = report.results.iter().map(|r| r.current_payoff_amount).sum();
        assert_abs_diff_eq!(summary.total_outstanding, expected_outstanding, epsilon = 1e-6);
        assert_abs_diff_eq!(summary.total_monthly_installments, 100.0 + 1_883.02 + 1_500.0, epsilon = 1e-9);
        assert!(summary.total_potential_savings >= 1_947.18 - 1e-6);
    }

    #[test]
    fn test_empty_portfolio() {
        let report = PortfolioRunner::new().run(&[]);
        assert!(report.results.is_empty());
        assert_eq!(report.summary, PortfolioSummary::default());
    }
}
