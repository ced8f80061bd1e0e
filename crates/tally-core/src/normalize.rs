//! Bank statement normalization
//!
//! Two export layouts are supported:
//! - `Date, Amount[, Description | Narration]` with a single signed amount
//! - `Date, Withdrawal Amt., Deposit Amt.[, Narration]` with split columns
//!
//! Column-level problems abort the whole batch. Row-level amount problems
//! only drop the affected row.

use csv::ReaderBuilder;
use std::io::Read;
use tracing::debug;

use crate::categorize::categorize_transaction;
use crate::error::{Error, Result};
use crate::models::{RawRecords, Transaction, NO_DESCRIPTION};

pub const DATE_COLUMN: &str = "Date";
pub const AMOUNT_COLUMN: &str = "Amount";
pub const DESCRIPTION_COLUMN: &str = "Description";
pub const NARRATION_COLUMN: &str = "Narration";
pub const WITHDRAWAL_COLUMN: &str = "Withdrawal Amt.";
pub const DEPOSIT_COLUMN: &str = "Deposit Amt.";

const MISSING_AMOUNT_MSG: &str =
    "CSV must contain either 'Amount' or both 'Withdrawal Amt.' and 'Deposit Amt.' columns.";
const MISSING_DATE_MSG: &str = "CSV must contain a 'Date' column.";

/// Which amount layout a record set uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountSchema {
    /// Separate withdrawal and deposit columns; amount = deposit - withdrawal
    WithdrawalDeposit {
        withdrawal: usize,
        deposit: usize,
        narration: Option<usize>,
    },
    /// A single signed amount column
    SignedAmount {
        amount: usize,
        description: Option<usize>,
    },
}

impl RawRecords {
    /// Read a headed CSV export into a raw record set
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = rdr.headers()?.iter().map(str::to_string).collect();
        let mut rows = Vec::new();
        for result in rdr.records() {
            let record = result?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self::new(headers, rows))
    }
}

/// Parse an amount cell, stripping thousands separators
///
/// Returns None for empty or non-numeric values.
pub fn parse_amount(s: &str) -> Option<f64> {
    let cleaned = s.trim().replace(',', "");
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Detect the amount layout of a record set whose headers are already trimmed
pub fn detect_schema(records: &RawRecords) -> Result<AmountSchema> {
    let narration = records.column(NARRATION_COLUMN);

    let schema = match (
        records.column(WITHDRAWAL_COLUMN),
        records.column(DEPOSIT_COLUMN),
        records.column(AMOUNT_COLUMN),
    ) {
        (Some(withdrawal), Some(deposit), _) => AmountSchema::WithdrawalDeposit {
            withdrawal,
            deposit,
            narration,
        },
        (_, _, Some(amount)) => AmountSchema::SignedAmount {
            amount,
            description: records.column(DESCRIPTION_COLUMN).or(narration),
        },
        _ => return Err(Error::MissingColumns(MISSING_AMOUNT_MSG.to_string())),
    };

    if records.column(DATE_COLUMN).is_none() {
        return Err(Error::MissingColumns(MISSING_DATE_MSG.to_string()));
    }

    Ok(schema)
}

/// Normalize a raw record set into categorized transactions
///
/// Ids are assigned 1..N over the rows that survive amount parsing.
pub fn process_records(mut records: RawRecords) -> Result<Vec<Transaction>> {
    if records.is_empty() {
        return Err(Error::EmptyInput);
    }

    records.trim_headers();
    let schema = detect_schema(&records)?;
    let date_col = records.column(DATE_COLUMN).ok_or_else(|| {
        Error::MissingColumns(MISSING_DATE_MSG.to_string())
    })?;

    let mut transactions = Vec::with_capacity(records.len());
    let mut dropped = 0usize;

    for row in 0..records.len() {
        let (amount, description) = match schema {
            AmountSchema::WithdrawalDeposit {
                withdrawal,
                deposit,
                narration,
            } => {
                let withdrawal = parse_amount(records.cell(row, withdrawal)).unwrap_or(0.0);
                let deposit = parse_amount(records.cell(row, deposit)).unwrap_or(0.0);
                (
                    Some(deposit - withdrawal),
                    description_or_default(&records, row, narration),
                )
            }
            AmountSchema::SignedAmount {
                amount,
                description,
            } => (
                parse_amount(records.cell(row, amount)),
                description_or_default(&records, row, description),
            ),
        };

        let Some(amount) = amount else {
            dropped += 1;
            continue;
        };

        let category = categorize_transaction(&description).to_string();
        transactions.push(Transaction {
            id: transactions.len() as i64 + 1,
            date: records.cell(row, date_col).to_string(),
            description,
            amount,
            category,
            custom_name: String::new(),
        });
    }

    debug!(
        ?schema,
        kept = transactions.len(),
        dropped,
        "Normalized bank statement"
    );
    Ok(transactions)
}

/// Parse and normalize a CSV export in one step
pub fn process_csv<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    process_records(RawRecords::from_csv_reader(reader)?)
}

fn description_or_default(records: &RawRecords, row: usize, column: Option<usize>) -> String {
    column
        .map(|c| records.cell(row, c))
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(NO_DESCRIPTION)
        .to_string()
}
