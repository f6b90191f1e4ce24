//! Rank a file of debts by how strongly early payoff is recommended
//!
//! Usage: analyze_debts [DEBTS_CSV] [--json]
//! The CSV path may also come from DEBTS_CSV (default data/debts.csv).
//! Score settings are read from environment variables:
//!   SAVINGS_WEIGHT, RATE_WEIGHT, SAVINGS_RATIO_CAP, ANNUAL_RATE_CAP_PCT,
//!   RECOMMEND_THRESHOLD, CONSIDER_THRESHOLD

use anyhow::{Context, Result};
use debt_payoff::debt::{load_debts, loader::DEFAULT_DEBTS_PATH};
use debt_payoff::{EngineConfig, PortfolioRunner, RecommendationConfig};
use serde::Serialize;
use std::env;
use std::time::Instant;

#[derive(Serialize)]
struct AnalysisResponse<'a> {
    source: String,
    config: RecommendationConfig,
    report: &'a debt_payoff::PortfolioReport,
    execution_time_ms: u64,
}

fn env_f64(name: &str, default: f64) -> f64 {
    env::var(name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn recommendation_config_from_env() -> RecommendationConfig {
    let defaults = RecommendationConfig::default();
    RecommendationConfig {
        savings_weight: env_f64("SAVINGS_WEIGHT", defaults.savings_weight),
        rate_weight: env_f64("RATE_WEIGHT", defaults.rate_weight),
        savings_ratio_cap: env_f64("SAVINGS_RATIO_CAP", defaults.savings_ratio_cap),
        annual_rate_cap_pct: env_f64("ANNUAL_RATE_CAP_PCT", defaults.annual_rate_cap_pct),
        recommend_threshold: env_f64("RECOMMEND_THRESHOLD", defaults.recommend_threshold),
        consider_threshold: env_f64("CONSIDER_THRESHOLD", defaults.consider_threshold),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let start = Instant::now();
    let json_output = env::args().any(|arg| arg == "--json");

    let path = env::args()
        .skip(1)
        .find(|arg| !arg.starts_with("--"))
        .or_else(|| env::var("DEBTS_CSV").ok())
        .unwrap_or_else(|| DEFAULT_DEBTS_PATH.to_string());

    let debts = load_debts(&path).with_context(|| format!("Failed to load debts from {}", path))?;
    if !json_output {
        println!("Loaded {} debts from {}", debts.len(), path);
    }

    let recommendation = recommendation_config_from_env();
    let runner = PortfolioRunner::with_config(EngineConfig {
        recommendation,
        ..EngineConfig::default()
    });
    let report = runner.run(&debts);

    if json_output {
        let response = AnalysisResponse {
            source: path,
            config: recommendation,
            report: &report,
            execution_time_ms: start.elapsed().as_millis() as u64,
        };
        println!("{}", serde_json::to_string(&response)?);
        return Ok(());
    }

    let names: std::collections::HashMap<u32, &str> =
        debts.iter().map(|d| (d.debt_id, d.name.as_str())).collect();

    println!();
    println!(
        "{:>4} {:<20} {:>12} {:>12} {:>10} {:>8} {:>6}  {}",
        "ID",
        "Name",
        "Payoff",
        "Savings",
        "Annual%",
        "Left",
        "Score",
        "Verdict"
    );
    println!("{}", "-".repeat(96));
    for r in &report.results {
        println!(
            "{:>4} {:<20} {:>12.2} {:>12.2} {:>10.2} {:>8} {:>6.1}  {}",
            r.debt_id,
            names.get(&r.debt_id).copied().unwrap_or(""),
            r.current_payoff_amount,
            r.interest_savings,
            r.annual_interest_rate,
            r.remaining_installments,
            r.recommendation_score,
            r.recommendation,
        );
    }

    let s = &report.summary;
    println!("\nPortfolio Summary:");
    println!("  Debts:                {}", s.debt_count);
    println!("  Recommended payoffs:  {}", s.recommended_count);
    println!("  Outstanding today:    ${:.2}", s.total_outstanding);
    println!("  Future payments:      ${:.2}", s.total_future_payments);
    println!("  Potential savings:    ${:.2}", s.total_potential_savings);
    println!("  Monthly installments: ${:.2}", s.total_monthly_installments);

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
