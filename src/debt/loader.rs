//! Load debts from a CSV export

use super::Debt;
use crate::error::{DebtError, Result};
use chrono::NaiveDate;
use csv::{Reader, Trim};
use std::path::Path;

/// Default location of the debts file
pub const DEFAULT_DEBTS_PATH: &str = "data/debts.csv";

/// Raw CSV row matching the debts export columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "DebtID")]
    debt_id: u32,
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "FinancedAmount")]
    financed_amount: f64,
    #[serde(rename = "InstallmentValue")]
    installment_value: f64,
    #[serde(rename = "TotalInstallments")]
    total_installments: u32,
    #[serde(rename = "PaidInstallments")]
    paid_installments: u32,
    #[serde(rename = "RemainingBalance", default)]
    remaining_balance: Option<f64>,
    #[serde(rename = "FirstDueDate", default)]
    first_due_date: Option<String>,
}

impl CsvRow {
    fn to_debt(self) -> Result<Debt> {
        let first_due_date = match self.first_due_date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .map_err(|_| DebtError::InvalidDate { value: raw.to_string() })?,
            ),
        };

        let debt = Debt {
            debt_id: self.debt_id,
            name: self.name,
            financed_amount: self.financed_amount,
            installment_value: self.installment_value,
            total_installments: self.total_installments,
            paid_installments: self.paid_installments,
            remaining_balance: self.remaining_balance,
            first_due_date,
        };
        debt.validate()?;
        Ok(debt)
    }
}

/// Load all debts from a CSV file
pub fn load_debts<P: AsRef<Path>>(path: P) -> Result<Vec<Debt>> {
    let file = std::fs::File::open(path)?;
    load_debts_from_reader(file)
}

/// Load debts from any reader (e.g. string buffer, upload stream)
pub fn load_debts_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Debt>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    read_rows(&mut csv_reader)
}

fn read_rows<R: std::io::Read>(reader: &mut Reader<R>) -> Result<Vec<Debt>> {
    let mut debts = Vec::new();

    for (idx, result) in reader.deserialize().enumerate() {
        let row_number = idx + 1;
        let row: CsvRow = result.map_err(|e| DebtError::Row {
            row: row_number,
            source: Box::new(DebtError::Csv(e)),
        })?;
        let debt = row.to_debt().map_err(|e| DebtError::Row {
            row: row_number,
            source: Box::new(e),
        })?;
        debts.push(debt);
    }

    log::info!("Loaded {} debts", debts.len());
    Ok(debts)
}

/// Load debts from the default data/debts.csv location
pub fn load_default_debts() -> Result<Vec<Debt>> {
    load_debts(DEFAULT_DEBTS_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
DebtID,Name,FinancedAmount,InstallmentValue,TotalInstallments,PaidInstallments,RemainingBalance,FirstDueDate
1,Car loan,20000,1883.02,12,3,15000,2026-01-10
2,Phone,1200,100,12,4,,
";

    #[test]
    fn test_load_from_reader() {
        let debts = load_debts_from_reader(SAMPLE.as_bytes()).expect("Failed to load debts");
        assert_eq!(debts.len(), 2);

        let car = &debts[0];
        assert_eq!(car.debt_id, 1);
        assert_eq!(car.name, "Car loan");
        assert_eq!(car.remaining_balance, Some(15_000.0));
        assert_eq!(car.first_due_date, NaiveDate::from_ymd_opt(2026, 1, 10));

        let phone = &debts[1];
        assert_eq!(phone.remaining_balance, None);
        assert_eq!(phone.first_due_date, None);
        assert_eq!(phone.remaining_installments(), 8);
    }

    #[test]
    fn test_load_default_debts() {
        let debts = load_default_debts().expect("Failed to load debts");
        assert_eq!(debts.len(), 5);
        assert_eq!(debts[2].name, "Mortgage");
        assert_eq!(debts[2].remaining_installments(), 240);
    }

    #[test]
    fn test_invalid_row_reports_row_number() {
        let csv = "\
DebtID,Name,FinancedAmount,InstallmentValue,TotalInstallments,PaidInstallments,RemainingBalance,FirstDueDate
1,Ok,1000,100,10,0,,
2,Bad,1000,100,10,10,,
";
        let err = load_debts_from_reader(csv.as_bytes()).unwrap_err();
        match err {
            DebtError::Row { row, source } => {
                assert_eq!(row, 2);
                assert!(matches!(*source, DebtError::PaidNotLessThanTotal { .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_date_rejected() {
        let csv = "\
DebtID,Name,FinancedAmount,InstallmentValue,TotalInstallments,PaidInstallments,RemainingBalance,FirstDueDate
1,Ok,1000,100,10,0,,10/01/2026
";
        let err = load_debts_from_reader(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("10/01/2026"));
    }

    #[test]
    fn test_malformed_number_is_csv_error() {
        let csv = "\
DebtID,Name,FinancedAmount,InstallmentValue,TotalInstallments,PaidInstallments,RemainingBalance,FirstDueDate
1,Ok,abc,100,10,0,,
";
        let err = load_debts_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DebtError::Row { row: 1, .. }));
    }
}
