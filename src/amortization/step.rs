//! Single period of a constant-installment (Price method) loan

use serde::{Deserialize, Serialize};

/// Split of one installment into interest and principal
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AmortizationStep {
    pub interest: f64,
    pub amortization: f64,
    pub new_balance: f64,
}

impl AmortizationStep {
    /// Terminal step once the balance is settled
    pub const ZERO: AmortizationStep = AmortizationStep {
        interest: 0.0,
        amortization: 0.0,
        new_balance: 0.0,
    };

    /// Cash actually paid this period
    pub fn payment(&self) -> f64 {
        self.interest + self.amortization
    }
}

/// Advance one period. Pure: no knowledge of period index or dates.
///
/// The final installment may be partial: amortization never exceeds the
/// balance, and neither interest nor amortization is ever negative.
pub fn amortization_step(remaining_balance: f64, installment_value: f64, periodic_rate: f64) -> AmortizationStep {
    if !(remaining_balance > 0.0) {
        return AmortizationStep::ZERO;
    }

    let interest = remaining_balance * periodic_rate;
    let mut amortization = installment_value - interest;
    if amortization > remaining_balance {
        amortization = remaining_balance;
    }

    let interest = interest.max(0.0);
    let amortization = amortization.max(0.0);
    let new_balance = (remaining_balance - amortization).max(0.0);

    AmortizationStep { interest, amortization, new_balance }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_regular_step() {
        let step = amortization_step(10_000.0, 950.0, 0.02);
        assert_abs_diff_eq!(step.interest, 200.0, epsilon = 1e-9);
        assert_abs_diff_eq!(step.amortization, 750.0, epsilon = 1e-9);
        assert_abs_diff_eq!(step.new_balance, 9_250.0, epsilon = 1e-9);
        assert_abs_diff_eq!(step.payment(), 950.0, epsilon = 1e-9);
    }

    #[test]
    fn test_final_partial_installment() {
        let step = amortization_step(300.0, 950.0, 0.02);
        assert_abs_diff_eq!(step.interest, 6.0, epsilon = 1e-9);
        assert_eq!(step.amortization, 300.0);
        assert_eq!(step.new_balance, 0.0);
        assert_abs_diff_eq!(step.payment(), 306.0, epsilon = 1e-9);
    }

    #[test]
    fn test_terminal_idempotence() {
        for _ in 0..5 {
            assert_eq!(amortization_step(0.0, 950.0, 0.02), AmortizationStep::ZERO);
        }
        assert_eq!(amortization_step(-25.0, 950.0, 0.02), AmortizationStep::ZERO);
    }

    #[test]
    fn test_installment_below_interest_never_negative() {
        // Negative amortization is floored; the balance does not grow
        let step = amortization_step(10_000.0, 100.0, 0.02);
        assert_abs_diff_eq!(step.interest, 200.0, epsilon = 1e-9);
        assert_eq!(step.amortization, 0.0);
        assert_eq!(step.new_balance, 10_000.0);
    }

    #[test]
    fn test_negative_rate_floors_interest() {
        let step = amortization_step(1_000.0, 100.0, -0.01);
        assert_eq!(step.interest, 0.0);
        assert_abs_diff_eq!(step.amortization, 110.0, epsilon = 1e-9);
    }
}
