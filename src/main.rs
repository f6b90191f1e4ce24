//! Debt Payoff CLI
//!
//! Analyze a single debt from command-line flags

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use debt_payoff::{AmortizationEngine, Debt};
use std::fs::File;

#[derive(Debug, Parser)]
#[command(name = "debt_payoff", version, about = "Early-payoff analysis for an installment loan")]
struct Args {
    /// Original principal
    #[arg(long)]
    financed: f64,

    /// Fixed monthly installment
    #[arg(long)]
    installment: f64,

    /// Contractual number of installments
    #[arg(long)]
    total: u32,

    /// Installments already paid
    #[arg(long, default_value_t = 0)]
    paid: u32,

    /// Outstanding balance today (derived from the schedule if omitted)
    #[arg(long)]
    balance: Option<f64>,

    /// Due date of the first installment (YYYY-MM-DD)
    #[arg(long)]
    first_due: Option<NaiveDate>,

    /// Extra lump sum to evaluate as a prepayment
    #[arg(long)]
    extra: Option<f64>,

    /// Write the remaining schedule to this CSV file
    #[arg(long)]
    csv: Option<String>,

    /// Print JSON instead of a report
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut debt = Debt::try_new(
        1,
        args.financed,
        args.installment,
        args.total,
        args.paid,
        args.balance,
    )
    .context("Invalid debt")?;
    if let Some(date) = args.first_due {
        debt = debt.with_first_due_date(date);
    }

    let engine = AmortizationEngine::default();
    let payoff = engine.payoff(&debt);
    let schedule = engine.remaining_schedule(&debt);
    let prepayment = args.extra.map(|extra| engine.prepayment(&debt, extra));

    if let Some(path) = &args.csv {
        let file = File::create(path).with_context(|| format!("Unable to create {}", path))?;
        schedule.write_csv(file).context("Failed to write schedule")?;
    }

    if args.json {
        let output = serde_json::json!({
            "debt": debt,
            "payoff": payoff,
            "schedule": schedule,
            "prepayment": prepayment,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Debt Payoff v0.1.0");
    println!("==================\n");

    println!("Debt:");
    println!("  Financed:      ${:.2}", debt.financed_amount);
    println!("  Installment:   ${:.2} x {}", debt.installment_value, debt.total_installments);
    println!("  Paid:          {}", debt.paid_installments);
    println!();

    println!("Payoff analysis:");
    println!("  Monthly rate:          {:.4}%", payoff.monthly_interest_rate * 100.0);
    println!("  Annual rate:           {:.2}%", payoff.annual_interest_rate);
    println!("  Remaining installments: {}", payoff.remaining_installments);
    println!("  Payoff today:          ${:.2}", payoff.current_payoff_amount);
    println!("  Future payments:       ${:.2}", payoff.total_future_payments);
    println!("  Savings (nominal):     ${:.2}", payoff.interest_savings);
    println!("  Total with interest:   ${:.2}", payoff.total_debt_with_interest);
    println!(
        "  Score:                 {:.1} ({})",
        payoff.recommendation_score, payoff.recommendation
    );
    println!();

    println!(
        "{:>4} {:>10} {:>14} {:>12} {:>12} {:>12} {:>14}",
        "#",
        "Due",
        "Opening",
        "Payment",
        "Interest",
        "Principal",
        "Closing"
    );
    println!("{}", "-".repeat(84));
    for row in &schedule.rows {
        let due = row.due_date.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string());
        println!(
            "{:>4} {:>10} {:>14.2} {:>12.2} {:>12.2} {:>12.2} {:>14.2}",
            row.installment_number,
            due,
            row.opening_balance,
            row.payment,
            row.interest,
            row.amortization,
            row.closing_balance,
        );
    }

    let summary = schedule.summary();
    println!(
        "\nSchedule totals: paid ${:.2}, interest ${:.2}",
        summary.total_paid, summary.total_interest
    );

    if let Some(p) = prepayment {
        println!("\nPrepayment of ${:.2}:", p.extra_payment);
        println!(
            "  Installments: {} -> {} ({} saved)",
            p.installments_before, p.installments_after, p.installments_saved
        );
        println!(
            "  Interest:     ${:.2} -> ${:.2} (${:.2} saved)",
            p.interest_before, p.interest_after, p.interest_saved
        );
        if p.full_payoff {
            println!("  Settles the debt");
        }
    }

    if let Some(path) = &args.csv {
        println!("\nSchedule written to: {}", path);
    }

    Ok(())
}
