//! Tally Core Library
//!
//! Shared functionality for the Tally bank statement categorizer:
//! - CSV normalization for the supported bank export layouts
//! - Keyword-based transaction categorization
//! - In-memory transaction store with category overrides
//! - Expense summaries grouped by display label

pub mod categorize;
pub mod error;
pub mod models;
pub mod normalize;
pub mod store;

pub use categorize::{categorize_transaction, CATEGORY_RULES};
pub use error::{Error, Result};
pub use models::{CategorySummary, RawRecords, Transaction, PREDEFINED_CATEGORIES};
pub use normalize::{process_csv, process_records};
pub use store::{summarize_expenses, TransactionStore};
