//! Effective periodic rate implied by a fixed-installment loan
//!
//! Inverts the annuity present-value identity
//! `financed = installment * (1 - (1+i)^-n) / i` with Newton-Raphson.

/// Solver constants. The defaults are the production values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Maximum Newton iterations
    pub max_iterations: u32,
    /// Convergence tolerance on successive rate estimates
    pub tolerance: f64,
    /// Currency tolerance below which the loan is treated as interest free
    pub zero_interest_tolerance: f64,
    /// Rate used when the estimate leaves the domain of the identity
    pub fallback_rate: f64,
    /// Upper clamp on the periodic rate (0.5 = 50% per period)
    pub max_rate: f64,
    /// Floor applied when the contract shows genuine interest
    pub min_positive_rate: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            tolerance: 1e-6,
            zero_interest_tolerance: 0.01,
            fallback_rate: 0.001,
            max_rate: 0.5,
            min_positive_rate: 0.001,
        }
    }
}

/// Solver output with convergence diagnostics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateSolution {
    /// Periodic (monthly) rate as a decimal
    pub rate: f64,
    /// Newton iterations performed (0 for the short-circuit cases)
    pub iterations: u32,
    /// False when the iteration cap was hit
    pub converged: bool,
}

impl RateSolution {
    fn exact(rate: f64) -> Self {
        Self { rate, iterations: 0, converged: true }
    }
}

/// Solve the periodic rate with the default solver settings.
///
/// Returns 0 for invalid input or an interest-free contract. Never fails.
pub fn solve_effective_rate(financed_amount: f64, installment_value: f64, total_installments: u32) -> f64 {
    solve_effective_rate_detailed(&SolverConfig::default(), financed_amount, installment_value, total_installments).rate
}

/// Solve the periodic rate with explicit solver settings
pub fn solve_effective_rate_with(
    config: &SolverConfig,
    financed_amount: f64,
    installment_value: f64,
    total_installments: u32,
) -> f64 {
    solve_effective_rate_detailed(config, financed_amount, installment_value, total_installments).rate
}

/// Solve the periodic rate and report how the iteration went
pub fn solve_effective_rate_detailed(
    config: &SolverConfig,
    financed_amount: f64,
    installment_value: f64,
    total_installments: u32,
) -> RateSolution {
    if !(financed_amount > 0.0) || !(installment_value > 0.0) || total_installments == 0 {
        return RateSolution::exact(0.0);
    }

    let n = total_installments as f64;
    let total_interest = installment_value * n - financed_amount;

    // Interest-free contract; the identity is 0/0 at i = 0
    if total_interest.abs() < config.zero_interest_tolerance {
        return RateSolution::exact(0.0);
    }

    // Linear approximation as the starting point
    let mut rate = total_interest / (financed_amount * n);
    let mut iterations = 0;
    let mut converged = false;

    while iterations < config.max_iterations {
        iterations += 1;

        if rate <= -1.0 {
            rate = config.fallback_rate;
        }
        if rate.abs() < 1e-6 {
            rate = config.fallback_rate;
        }

        let (f, df) = residual_and_derivative(financed_amount, installment_value, total_installments, rate);
        if df == 0.0 || !df.is_finite() {
            break;
        }

        let new_rate = (rate - f / df).clamp(0.0, config.max_rate);

        if (new_rate - rate).abs() < config.tolerance {
            rate = new_rate;
            converged = true;
            break;
        }

        rate = new_rate;
    }

    if !converged {
        log::debug!(
            "Rate solver stopped after {} iterations at {:.8} (financed={}, installment={}, n={})",
            iterations, rate, financed_amount, installment_value, total_installments
        );
    }

    if total_interest > 0.0 && rate < config.min_positive_rate {
        rate = config.min_positive_rate;
    }

    RateSolution { rate, iterations, converged }
}

/// f(i) = PV(installments at i) - financed, and df/di
fn residual_and_derivative(financed: f64, installment: f64, periods: u32, rate: f64) -> (f64, f64) {
    let n = periods as f64;
    let discount = (1.0 + rate).powf(-n);
    let annuity = (1.0 - discount) / rate;

    let f = installment * annuity - financed;
    let df = installment * (n * (1.0 + rate).powf(-n - 1.0) * rate - (1.0 - discount)) / (rate * rate);

    (f, df)
}

/// Present value of `periods` installments at a periodic rate.
/// A zero rate is the undiscounted sum.
pub fn annuity_present_value(installment_value: f64, rate: f64, periods: u32) -> f64 {
    if rate.abs() < 1e-12 {
        return installment_value * periods as f64;
    }
    installment_value * (1.0 - (1.0 + rate).powi(-(periods as i32))) / rate
}

/// Installment that amortizes `principal` over `periods` at a periodic rate
pub fn installment_for(principal: f64, rate: f64, periods: u32) -> f64 {
    if periods == 0 {
        return 0.0;
    }
    if rate.abs() < 1e-12 {
        return principal / periods as f64;
    }
    principal * rate / (1.0 - (1.0 + rate).powi(-(periods as i32)))
}

/// Compound a monthly rate into an annual rate (decimal)
pub fn annualize_rate(monthly_rate: f64) -> f64 {
    (1.0 + monthly_rate).powi(12) - 1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_annuity_identity_holds() {
        let cases = [
            (10_000.0, 950.0, 12),
            (20_000.0, 1_883.02, 12),
            (50_000.0, 1_200.0, 60),
            (200_000.0, 2_000.0, 360),
        ];

        for (financed, installment, n) in cases {
            let rate = solve_effective_rate(financed, installment, n);
            assert!(rate > 0.0);
            let pv = annuity_present_value(installment, rate, n);
            assert_abs_diff_eq!(pv, financed, epsilon = 0.01);
        }
    }

    #[test]
    fn test_known_rate() {
        // 12 payments of 950 on 10,000 is roughly 2.08% a month
        let rate = solve_effective_rate(10_000.0, 950.0, 12);
        assert_abs_diff_eq!(rate, 0.020757, epsilon = 1e-5);
    }

    #[test]
    fn test_recovers_rate_used_to_price_installment() {
        let installment = installment_for(30_000.0, 0.015, 48);
        let rate = solve_effective_rate(30_000.0, installment, 48);
        assert_abs_diff_eq!(rate, 0.015, epsilon = 1e-8);
    }

    #[test]
    fn test_zero_interest_short_circuits() {
        let solution = solve_effective_rate_detailed(&SolverConfig::default(), 1_200.0, 100.0, 12);
        assert_eq!(solution.rate, 0.0);
        assert_eq!(solution.iterations, 0);

        // Within a cent of interest free
        assert_eq!(solve_effective_rate(10_000.0, 10_000.0 / 7.0, 7), 0.0);
        assert_eq!(solve_effective_rate(1_000.0, 100.0005, 10), 0.0);
    }

    #[test]
    fn test_invalid_input_returns_zero() {
        assert_eq!(solve_effective_rate(0.0, 100.0, 12), 0.0);
        assert_eq!(solve_effective_rate(-500.0, 100.0, 12), 0.0);
        assert_eq!(solve_effective_rate(1_000.0, 0.0, 12), 0.0);
        assert_eq!(solve_effective_rate(1_000.0, 100.0, 0), 0.0);
        assert_eq!(solve_effective_rate(f64::NAN, 100.0, 12), 0.0);
    }

    #[test]
    fn test_negative_interest_clamps_to_zero() {
        // Installments sum to less than the principal
        // Each pass resets the zero estimate to the fallback rate and clamps
        // back to 0, so the loop runs to the cap and keeps its last estimate
        let solution = solve_effective_rate_detailed(&SolverConfig::default(), 1_000.0, 90.0, 10);
        assert_eq!(solution.rate, 0.0);
        assert!(!solution.converged);
        assert_eq!(solution.iterations, 100);

        let capped = SolverConfig { max_iterations: 7, ..SolverConfig::default() };
        let solution = solve_effective_rate_detailed(&capped, 1_000.0, 90.0, 10);
        assert_eq!(solution.rate, 0.0);
        assert!(!solution.converged);
        assert_eq!(solution.iterations, 7);
    }

    #[test]
    fn test_tiny_interest_is_floored() {
        // Half a unit of interest over one period solves to 0.0001
        let rate = solve_effective_rate(5_000.0, 5_000.5, 1);
        assert_eq!(rate, 0.001);
    }

    #[test]
    fn test_absurd_rate_is_capped() {
        let rate = solve_effective_rate(1_000.0, 1_001.0, 12);
        assert_eq!(rate, 0.5);
    }

    #[test]
    fn test_deterministic() {
        let a = solve_effective_rate_detailed(&SolverConfig::default(), 37_500.0, 1_111.11, 48);
        let b = solve_effective_rate_detailed(&SolverConfig::default(), 37_500.0, 1_111.11, 48);
        assert_eq!(a, b);
        assert!(a.converged);
    }

    #[test]
    fn test_annualize() {
        assert_abs_diff_eq!(annualize_rate(0.01), 0.126825, epsilon = 1e-6);
        assert_eq!(annualize_rate(0.0), 0.0);
    }
}
