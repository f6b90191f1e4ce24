//! Early-payoff analysis: payoff result, recommendation score, prepayment
//! what-if and a keyed result cache

mod calculator;
mod recommendation;
mod prepayment;
mod cache;

pub use calculator::{calculate_payoff, calculate_payoff_at, calculate_payoff_with, PayoffCalculationResult};
pub use recommendation::{recommendation_score, Recommendation, RecommendationConfig};
pub use prepayment::{simulate_prepayment, PrepaymentResult};
pub use cache::PayoffCache;
