//! Schedule output structures

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One installment of an amortization schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// 1-indexed installment number within the contract
    pub installment_number: u32,
    pub due_date: Option<NaiveDate>,
    pub opening_balance: f64,
    /// Interest plus amortization (short on a partial final installment)
    pub payment: f64,
    pub interest: f64,
    pub amortization: f64,
    pub closing_balance: f64,
}

/// Complete schedule for a debt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub debt_id: u32,

    /// Periodic rate used to build the rows
    pub periodic_rate: f64,

    pub rows: Vec<ScheduleRow>,
}

impl AmortizationSchedule {
    pub fn new(debt_id: u32, periodic_rate: f64) -> Self {
        Self {
            debt_id,
            periodic_rate,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: ScheduleRow) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Balance after the last row, 0 for an empty schedule
    pub fn final_balance(&self) -> f64 {
        self.rows.last().map(|r| r.closing_balance).unwrap_or(0.0)
    }

    pub fn summary(&self) -> ScheduleSummary {
        let total_paid: f64 = self.rows.iter().map(|r| r.payment).sum();
        let total_interest: f64 = self.rows.iter().map(|r| r.interest).sum();
        let total_amortized: f64 = self.rows.iter().map(|r| r.amortization).sum();

        ScheduleSummary {
            installments: self.rows.len() as u32,
            total_paid,
            total_interest,
            total_amortized,
            final_balance: self.final_balance(),
            last_due_date: self.rows.last().and_then(|r| r.due_date),
        }
    }

    /// Write the rows as CSV
    pub fn write_csv<W: std::io::Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for row in &self.rows {
            csv_writer.serialize(row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

/// Totals over a schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub installments: u32,
    pub total_paid: f64,
    pub total_interest: f64,
    pub total_amortized: f64,
    pub final_balance: f64,
    pub last_due_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(n: u32, opening: f64, interest: f64, amortization: f64) -> ScheduleRow {
        ScheduleRow {
            installment_number: n,
            due_date: None,
            opening_balance: opening,
            payment: interest + amortization,
            interest,
            amortization,
            closing_balance: opening - amortization,
        }
    }

    #[test]
    fn test_summary_totals() {
        let mut schedule = AmortizationSchedule::new(7, 0.01);
        schedule.add_row(row(1, 200.0, 2.0, 99.0));
        schedule.add_row(row(2, 101.0, 1.01, 101.0));

        let summary = schedule.summary();
        assert_eq!(summary.installments, 2);
        assert_eq!(summary.total_amortized, 200.0);
        assert!((summary.total_interest - 3.01).abs() < 1e-9);
        assert!((summary.total_paid - 203.01).abs() < 1e-9);
        assert_eq!(summary.final_balance, 0.0);
    }

    #[test]
    fn test_empty_schedule() {
        let schedule = AmortizationSchedule::new(1, 0.0);
        assert!(schedule.is_empty());
        assert_eq!(schedule.summary().total_paid, 0.0);
        assert_eq!(schedule.final_balance(), 0.0);
    }

    #[test]
    fn test_write_csv_has_header_and_rows() {
        let mut schedule = AmortizationSchedule::new(1, 0.0);
        schedule.add_row(row(1, 100.0, 0.0, 50.0));
        schedule.add_row(row(2, 50.0, 0.0, 50.0));

        let mut buf = Vec::new();
        schedule.write_csv(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("installment_number,due_date,opening_balance"));
    }
}
