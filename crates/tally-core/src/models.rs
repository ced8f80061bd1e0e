//! Domain models for Tally

use serde::{Deserialize, Serialize};

/// Category assigned when no keyword rule matches
pub const OTHER_CATEGORY: &str = "Other";

/// Description used when a row has no description or narration
pub const NO_DESCRIPTION: &str = "No description";

/// All built-in categories, in classifier priority order, followed by "Other"
pub const PREDEFINED_CATEGORIES: [&str; 15] = [
    "Groceries",
    "Utilities",
    "Rent",
    "Entertainment",
    "Transportation",
    "Dining",
    "Shopping",
    "Healthcare",
    "Education",
    "Insurance",
    "Investment",
    "Travel",
    "Personal Care",
    "Home & Garden",
    OTHER_CATEGORY,
];

/// A normalized bank transaction
///
/// Field names on the wire match what the dashboard client reads
/// (`Date`, `Description`, `Amount`, `Category`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Description")]
    pub description: String,
    /// Negative for withdrawals, positive for deposits
    #[serde(rename = "Amount")]
    pub amount: f64,
    #[serde(rename = "Category")]
    pub category: String,
    /// Display-label override; empty means "not set"
    #[serde(default)]
    pub custom_name: String,
}

impl Transaction {
    /// Label used when grouping expenses: the custom name if set, else the category
    pub fn display_label(&self) -> &str {
        if self.custom_name.is_empty() {
            &self.category
        } else {
            &self.custom_name
        }
    }

    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }

    pub fn is_uncategorized(&self) -> bool {
        self.category == OTHER_CATEGORY
    }
}

/// One row of the expense summary report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    #[serde(rename = "Category")]
    pub category: String,
    /// Absolute spend, rounded to cents
    #[serde(rename = "Amount")]
    pub amount: f64,
    #[serde(rename = "Transaction_Count")]
    pub transaction_count: usize,
}

/// A raw tabular record set as read from a bank export
///
/// Cells are kept as strings; interpretation happens in [`crate::normalize`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecords {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawRecords {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Build a record set from header names and rows of (possibly fewer) cells
    pub fn from_rows<H, R, C>(headers: H, rows: R) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Trim surrounding whitespace from every column name
    pub fn trim_headers(&mut self) {
        for header in &mut self.headers {
            *header = header.trim().to_string();
        }
    }

    /// Index of the first column with exactly this name
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cell value for a row, empty when the row is shorter than the header
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map(String::as_str)
            .unwrap_or("")
    }
}
