//! CSV export
//!
//! Writes every income and expense as one transaction row, ordered by date
//! (income before expenses on the same day, entry order otherwise).

use serde::Serialize;
use std::io::Write;

use crate::error::FinanceResult;
use crate::models::{Expense, Income};

#[derive(Debug, Serialize)]
struct TransactionRow<'a> {
    #[serde(rename = "Type")]
    kind: &'static str,
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Amount")]
    amount: String,
}

/// Export all transactions to CSV
pub fn export_transactions_csv<W: Write>(
    incomes: &[Income],
    expenses: &[Expense],
    writer: W,
) -> FinanceResult<()> {
    let mut rows: Vec<(chrono::NaiveDate, TransactionRow)> = incomes
        .iter()
        .map(|i| {
            (
                i.date,
                TransactionRow {
                    kind: "income",
                    id: i.id.to_string(),
                    date: i.date.format("%Y-%m-%d").to_string(),
                    name: &i.name,
                    category: &i.category,
                    amount: format!("{:.2}", i.amount.as_f64()),
                },
            )
        })
        .chain(expenses.iter().map(|e| {
            (
                e.date,
                TransactionRow {
                    kind: "expense",
                    id: e.id.to_string(),
                    date: e.date.format("%Y-%m-%d").to_string(),
                    name: &e.name,
                    category: &e.category,
                    amount: format!("{:.2}", e.amount.as_f64()),
                },
            )
        }))
        .collect();
    rows.sort_by_key(|(date, _)| *date);

    let mut csv_writer = csv::Writer::from_writer(writer);
    for (_, row) in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    #[test]
    fn test_export_orders_by_date() {
        let incomes = vec![Income::new("Salary", Money::from_units(5000), day(5), "Job")];
        let expenses = vec![
            Expense::new("Dinner, out", Money::from_cents(125050), "food", day(9)),
            Expense::new("Bus", Money::from_units(40), "travel", day(2)),
        ];

        let mut buffer = Vec::new();
        export_transactions_csv(&incomes, &expenses, &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines[0], "Type,ID,Date,Name,Category,Amount");
        assert!(lines[1].starts_with("expense,"));
        assert!(lines[1].ends_with("2025-01-02,Bus,travel,40.00"));
        assert!(lines[2].starts_with("income,"));
        assert!(lines[3].ends_with("\"Dinner, out\",food,1250.50"));
    }

    #[test]
    fn test_export_empty_writes_nothing() {
        let mut buffer = Vec::new();
        export_transactions_csv(&[], &[], &mut buffer).unwrap();
        assert!(buffer.is_empty());
    }
}
