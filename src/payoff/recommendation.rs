//! Early-payoff recommendation score and tiers
//!
//! The score adds two saturating linear components:
//!
//! - relative savings: `interest_savings / current_payoff_amount`, full marks
//!   at `savings_ratio_cap`
//! - implied annual rate (percent), full marks at `annual_rate_cap_pct`
//!
//! Each component is clamped to `[0, 1]` before weighting, so the score is
//! bounded, non-decreasing in both inputs and deterministic.

use serde::{Deserialize, Serialize};

/// Score weights and tier thresholds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// Points awarded for relative savings at or above the cap
    pub savings_weight: f64,
    /// Points awarded for an annual rate at or above the cap
    pub rate_weight: f64,
    /// Relative savings earning full savings points (0.25 = 25%)
    pub savings_ratio_cap: f64,
    /// Annual rate in percent earning full rate points
    pub annual_rate_cap_pct: f64,
    /// Minimum score for [`Recommendation::Recommend`]
    pub recommend_threshold: f64,
    /// Minimum score for [`Recommendation::Consider`]; also the
    /// `is_recommended` cut-off
    pub consider_threshold: f64,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            savings_weight: 50.0,
            rate_weight: 50.0,
            savings_ratio_cap: 0.25,
            annual_rate_cap_pct: 24.0,
            recommend_threshold: 80.0,
            consider_threshold: 60.0,
        }
    }
}

/// Tiered label shown next to a debt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    /// Paying off now is clearly advantageous
    Recommend,
    /// Worth considering
    Consider,
    /// Keep the schedule
    NotWorthIt,
}

impl Recommendation {
    pub fn from_score(score: f64, config: &RecommendationConfig) -> Self {
        if score >= config.recommend_threshold {
            Recommendation::Recommend
        } else if score >= config.consider_threshold {
            Recommendation::Consider
        } else {
            Recommendation::NotWorthIt
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Recommendation::Recommend => "Recommended",
            Recommendation::Consider => "Consider",
            Recommendation::NotWorthIt => "Not worth it",
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Score in `[0, 100]` from nominal savings, payoff amount and annual rate (%)
pub fn recommendation_score(
    config: &RecommendationConfig,
    interest_savings: f64,
    current_payoff_amount: f64,
    annual_rate_pct: f64,
) -> f64 {
    let savings_ratio = if current_payoff_amount > 0.0 {
        interest_savings / current_payoff_amount
    } else {
        0.0
    };

    let savings_component = saturate(savings_ratio, config.savings_ratio_cap);
    let rate_component = saturate(annual_rate_pct, config.annual_rate_cap_pct);

    let score = config.savings_weight.max(0.0) * savings_component
        + config.rate_weight.max(0.0) * rate_component;

    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 100.0)
    }
}

/// value / cap clamped to [0, 1]; NaN and non-positive caps give 0
fn saturate(value: f64, cap: f64) -> f64 {
    if !(cap > 0.0) || value.is_nan() {
        return 0.0;
    }
    (value / cap).clamp(0.0, 1.0)
}
