//! In-memory transaction store
//!
//! Holds the most recently ingested snapshot. Every ingestion replaces the
//! snapshot wholesale; edits mutate rows in place. All access goes through
//! one lock so readers never observe a half-applied change.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::models::{CategorySummary, RawRecords, Transaction};
use crate::normalize::{process_csv, process_records};

type Snapshot = Option<Vec<Transaction>>;

/// Shared handle to the current transaction snapshot
#[derive(Clone, Debug, Default)]
pub struct TransactionStore {
    snapshot: Arc<Mutex<Snapshot>>,
}

impl TransactionStore {
    /// Create an empty store (no snapshot loaded)
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Snapshot>> {
        self.snapshot
            .lock()
            .map_err(|_| Error::Internal("transaction store lock poisoned".to_string()))
    }

    fn replace(&self, transactions: Vec<Transaction>) -> Result<usize> {
        let count = transactions.len();
        *self.lock()? = Some(transactions);
        info!(count, "Loaded transaction snapshot");
        Ok(count)
    }

    /// Normalize a raw record set and replace the snapshot with it
    ///
    /// On error the previous snapshot is left untouched.
    pub fn ingest(&self, records: RawRecords) -> Result<usize> {
        let transactions = process_records(records)?;
        self.replace(transactions)
    }

    /// Parse a CSV export and replace the snapshot with it
    pub fn ingest_csv<R: Read>(&self, reader: R) -> Result<usize> {
        let transactions = process_csv(reader)?;
        self.replace(transactions)
    }

    /// Load the bundled sample statement from disk
    pub fn load_sample(&self, path: &Path) -> Result<usize> {
        let file = std::fs::File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::SampleFileMissing(
                path.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string()),
            ),
            _ => Error::Io(e),
        })?;
        self.ingest_csv(file)
    }

    /// Whether a snapshot has been loaded
    pub fn is_loaded(&self) -> Result<bool> {
        Ok(self.lock()?.is_some())
    }

    /// Number of transactions in the current snapshot
    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.as_ref().ok_or(Error::NoData)?.len())
    }

    /// All transactions in snapshot order
    pub fn list_all(&self) -> Result<Vec<Transaction>> {
        Ok(self.lock()?.as_ref().ok_or(Error::NoData)?.clone())
    }

    /// Transactions the classifier could not place (category "Other")
    pub fn list_uncategorized(&self) -> Result<Vec<Transaction>> {
        let guard = self.lock()?;
        let transactions = guard.as_ref().ok_or(Error::NoData)?;
        Ok(transactions
            .iter()
            .filter(|t| t.is_uncategorized())
            .cloned()
            .collect())
    }

    /// Override the category and display label of a single transaction
    pub fn update_category(&self, id: i64, category: &str, custom_name: &str) -> Result<()> {
        let mut guard = self.lock()?;
        let transactions = guard.as_mut().ok_or(Error::NoData)?;
        let tx = transactions
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(Error::NotFound(id))?;

        tx.category = category.to_string();
        tx.custom_name = custom_name.to_string();
        debug!(id, category, custom_name, "Updated transaction category");
        Ok(())
    }

    /// Apply a custom category to a transaction and to every transaction
    /// whose description contains one of the keywords (case-insensitive)
    ///
    /// Returns the number of rows relabeled, including the target.
    pub fn add_custom_category(
        &self,
        id: i64,
        custom_category: &str,
        keywords: &[String],
    ) -> Result<usize> {
        let mut guard = self.lock()?;
        let transactions = guard.as_mut().ok_or(Error::NoData)?;
        let target = transactions
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(Error::NotFound(id))?;
        relabel(target, custom_category);
        let mut relabeled = 1;

        let needles: Vec<String> = keywords
            .iter()
            .map(|k| k.trim())
            .filter(|k| !k.is_empty())
            .map(str::to_lowercase)
            .collect();

        if !needles.is_empty() {
            for tx in transactions.iter_mut().filter(|t| t.id != id) {
                let haystack = tx.description.to_lowercase();
                if needles.iter().any(|n| haystack.contains(n.as_str())) {
                    relabel(tx, custom_category);
                    relabeled += 1;
                }
            }
        }

        debug!(
            id,
            custom_category,
            keywords = needles.len(),
            relabeled,
            "Applied custom category"
        );
        Ok(relabeled)
    }

    /// Total spend per display label, largest first
    ///
    /// Only negative amounts count as expenses. Returns an empty list when
    /// the snapshot has no expenses.
    pub fn expense_summary(&self) -> Result<Vec<CategorySummary>> {
        let guard = self.lock()?;
        let transactions = guard.as_ref().ok_or(Error::NoData)?;
        Ok(summarize_expenses(transactions))
    }
}

fn relabel(tx: &mut Transaction, custom_category: &str) {
    tx.category = custom_category.to_string();
    tx.custom_name = custom_category.to_string();
}

/// Group expenses by display label, summing absolute amounts
pub fn summarize_expenses(transactions: &[Transaction]) -> Vec<CategorySummary> {
    let mut totals: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for tx in transactions.iter().filter(|t| t.is_expense()) {
        let entry = totals.entry(tx.display_label()).or_insert((0.0, 0));
        entry.0 += tx.amount.abs();
        entry.1 += 1;
    }

    // BTreeMap iteration is label-ordered, and the stable sort keeps that
    // order for equal totals
    let mut summary: Vec<CategorySummary> = totals
        .into_iter()
        .map(|(label, (amount, count))| CategorySummary {
            category: label.to_string(),
            amount,
            transaction_count: count,
        })
        .collect();
    summary.sort_by(|a, b| b.amount.total_cmp(&a.amount));

    for row in &mut summary {
        row.amount = round_cents(row.amount);
    }
    summary
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded_store() -> TransactionStore {
        let store = TransactionStore::new();
        let csv = "Date,Amount,Description
2024-01-01,-500,BIGBAZAAR PURCHASE
2024-01-02,300,SALARY
2024-01-03,-120.254,SWIGGY DINNER
2024-01-04,-80,ZOMATO LUNCH
2024-01-05,-45,Monthly salary adjustment
2024-01-06,-10,CORNER KIOSK";
        store.ingest_csv(csv.as_bytes()).unwrap();
        store
    }

    #[test]
    fn test_no_data_before_ingest() {
        let store = TransactionStore::new();
        assert!(!store.is_loaded().unwrap());
        assert!(matches!(store.list_all(), Err(Error::NoData)));
        assert!(matches!(store.list_uncategorized(), Err(Error::NoData)));
        assert!(matches!(store.expense_summary(), Err(Error::NoData)));
        assert!(matches!(
            store.update_category(1, "X", ""),
            Err(Error::NoData)
        ));
        assert!(matches!(
            store.add_custom_category(1, "X", &[]),
            Err(Error::NoData)
        ));
    }

    #[test]
    fn test_ingest_replaces_snapshot() {
        let store = loaded_store();
        assert_eq!(store.len().unwrap(), 6);

        store
            .ingest_csv("Date,Amount\n2024-02-01,-1\n".as_bytes())
            .unwrap();
        let all = store.list_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, 1);
        assert_eq!(all[0].description, "No description");
    }

    #[test]
    fn test_failed_ingest_keeps_previous_snapshot() {
        let store = loaded_store();
        let err = store
            .ingest_csv("Description,Amount\nX,-1\n".as_bytes())
            .unwrap_err();
        assert!(matches!(err, Error::MissingColumns(_)));
        assert_eq!(store.len().unwrap(), 6);

        let err = store.ingest(RawRecords::default()).unwrap_err();
        assert!(matches!(err, Error::EmptyInput));
        assert_eq!(store.len().unwrap(), 6);
    }

    #[test]
    fn test_list_uncategorized() {
        let store = loaded_store();
        let other = store.list_uncategorized().unwrap();
        let ids: Vec<i64> = other.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 5, 6]);
    }

    #[test]
    fn test_update_category() {
        let store = loaded_store();
        store.update_category(1, "Custom", "My Label").unwrap();

        let all = store.list_all().unwrap();
        assert_eq!(all[0].category, "Custom");
        assert_eq!(all[0].custom_name, "My Label");
        // Other rows untouched
        assert_eq!(all[1].category, "Other");

        let summary = store.expense_summary().unwrap();
        assert!(summary.iter().any(|s| s.category == "My Label"));
        assert!(!summary.iter().any(|s| s.category == "Custom"));
        assert!(!summary.iter().any(|s| s.category == "Groceries"));
    }

    #[test]
    fn test_update_category_not_found() {
        let store = loaded_store();
        let err = store.update_category(99, "X", "").unwrap_err();
        assert!(matches!(err, Error::NotFound(99)));
        assert_eq!(err.to_string(), "Transaction ID 99 not found.");
    }

    #[test]
    fn test_add_custom_category_with_keywords() {
        let store = loaded_store();
        let relabeled = store
            .add_custom_category(1, "X", &["SALARY".to_string(), "  ".to_string()])
            .unwrap();
        assert_eq!(relabeled, 3);

        let all = store.list_all().unwrap();
        for id in [1, 2, 5] {
            let tx = &all[id - 1];
            assert_eq!(tx.category, "X");
            assert_eq!(tx.custom_name, "X");
        }
        assert_eq!(all[2].category, "Dining");
    }

    #[test]
    fn test_add_custom_category_without_keywords() {
        let store = loaded_store();
        assert_eq!(store.add_custom_category(6, "Snacks", &[]).unwrap(), 1);
        let all = store.list_all().unwrap();
        assert_eq!(all[5].category, "Snacks");
        assert_eq!(all[5].custom_name, "Snacks");
        assert_eq!(store.list_uncategorized().unwrap().len(), 2);
    }

    #[test]
    fn test_add_custom_category_not_found() {
        let store = loaded_store();
        let err = store
            .add_custom_category(42, "X", &["SALARY".to_string()])
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(42)));
        // No keyword side effects when the target is missing
        assert_eq!(store.list_all().unwrap()[1].category, "Other");
    }

    #[test]
    fn test_expense_summary() {
        let store = loaded_store();
        let summary = store.expense_summary().unwrap();

        assert_eq!(summary.len(), 3);
        assert_eq!(summary[0].category, "Groceries");
        assert_eq!(summary[0].amount, 500.0);
        assert_eq!(summary[0].transaction_count, 1);
        assert_eq!(summary[1].category, "Dining");
        assert_eq!(summary[1].amount, 200.25);
        assert_eq!(summary[1].transaction_count, 2);
        assert_eq!(summary[2].category, "Other");
        assert_eq!(summary[2].amount, 55.0);
        assert_eq!(summary[2].transaction_count, 2);
    }

    #[test]
    fn test_expense_summary_empty_when_no_expenses() {
        let store = TransactionStore::new();
        store
            .ingest_csv("Date,Amount,Description\n2024-01-01,100,SALARY\n".as_bytes())
            .unwrap();
        assert!(store.expense_summary().unwrap().is_empty());
    }

    #[test]
    fn test_summary_ties_ordered_by_label() {
        let transactions: Vec<Transaction> = ["Rent", "Dining"]
            .iter()
            .enumerate()
            .map(|(i, category)| Transaction {
                id: i as i64 + 1,
                date: "2024-01-01".to_string(),
                description: "X".to_string(),
                amount: -10.0,
                category: category.to_string(),
                custom_name: String::new(),
            })
            .collect();
        let summary = summarize_expenses(&transactions);
        assert_eq!(summary[0].category, "Dining");
        assert_eq!(summary[1].category, "Rent");
    }

    #[test]
    fn test_load_sample_missing_file() {
        let store = TransactionStore::new();
        let dir = tempfile::tempdir().unwrap();
        let err = store
            .load_sample(&dir.path().join("sample_data.csv.csv"))
            .unwrap_err();
        assert!(matches!(err, Error::SampleFileMissing(_)));
        assert_eq!(
            err.to_string(),
            "The sample_data.csv.csv file was not found on the server."
        );
    }

    #[test]
    fn test_load_sample() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.csv");
        std::fs::write(&path, "Date,Amount,Description\n2024-01-01,-9.99,NETFLIX\n").unwrap();

        let store = TransactionStore::new();
        assert_eq!(store.load_sample(&path).unwrap(), 1);
        assert_eq!(store.list_all().unwrap()[0].category, "Entertainment");
    }

    #[test]
    fn test_debug_shows_snapshot() {
        let empty = format!("{:?}", TransactionStore::new());
        assert!(empty.contains("TransactionStore"));
        assert!(empty.contains("None"));

        let loaded = format!("{:?}", loaded_store());
        assert!(loaded.contains("BIGBAZAAR PURCHASE"));
    }
}
