//! Price-method amortization: rate solver, step function and schedule engine

mod rate;
mod step;
mod state;
mod schedule;
mod engine;

pub use rate::{
    annualize_rate, annuity_present_value, installment_for, solve_effective_rate,
    solve_effective_rate_detailed, solve_effective_rate_with, RateSolution, SolverConfig,
};
pub use step::{amortization_step, AmortizationStep};
pub use state::ScheduleState;
pub use schedule::{AmortizationSchedule, ScheduleRow, ScheduleSummary};
pub use engine::{AmortizationEngine, EngineConfig};
