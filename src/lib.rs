//! Debt Payoff - amortization and early-payoff engine for installment loans
//!
//! This library provides:
//! - Effective periodic rate solving from a loan's principal, installment and term
//! - Price-method (constant installment) amortization schedules
//! - Early-payoff analysis with a 0-100 recommendation score
//! - Prepayment what-ifs, a keyed result cache and parallel portfolio runs

pub mod error;
pub mod debt;
pub mod amortization;
pub mod payoff;
pub mod portfolio;

// Re-export commonly used types
pub use error::DebtError;
pub use debt::Debt;
pub use amortization::{AmortizationEngine, AmortizationSchedule, AmortizationStep, EngineConfig, ScheduleRow};
pub use payoff::{PayoffCalculationResult, Recommendation, RecommendationConfig};
pub use portfolio::{PortfolioReport, PortfolioRunner};
