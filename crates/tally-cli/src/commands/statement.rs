//! Statement loading and categorization commands
//!
//! This module contains:
//! - `load_statement` - Shared utility to read a CSV statement into a store
//! - `cmd_categorize` - Categorize a single description
//! - `cmd_categories` - List built-in categories

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use tally_core::{categorize_transaction, TransactionStore, CATEGORY_RULES};
use tracing::debug;

/// Read and normalize a CSV statement into a fresh store
pub fn load_statement(path: &Path) -> Result<TransactionStore> {
    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;

    let store = TransactionStore::new();
    let count = store
        .ingest_csv(file)
        .with_context(|| format!("Failed to process {}", path.display()))?;
    debug!(path = %path.display(), count, "Loaded statement");

    Ok(store)
}

pub fn cmd_categorize(description: &str) -> Result<()> {
    println!("{}", categorize_transaction(description));
    Ok(())
}

pub fn cmd_categories() -> Result<()> {
    println!();
    println!("🏷️  Categories (checked in this order)");
    println!("   ─────────────────────────────");

    for (i, (label, keywords)) in CATEGORY_RULES.iter().enumerate() {
        println!(
            "   {:>2}. {:<16} {} keywords",
            i + 1,
            label,
            keywords.len()
        );
    }
    println!("       {:<16} (no keyword matched)", "Other");

    Ok(())
}
