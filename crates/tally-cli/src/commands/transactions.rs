//! Transaction command implementations

use anyhow::Result;
use tally_core::TransactionStore;

use super::truncate;

pub fn cmd_transactions_list(store: &TransactionStore, other_only: bool, json: bool) -> Result<()> {
    let transactions = if other_only {
        store.list_uncategorized()?
    } else {
        store.list_all()?
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&transactions)?);
        return Ok(());
    }

    if transactions.is_empty() {
        println!("No transactions to show.");
        return Ok(());
    }

    println!();
    if other_only {
        println!("❓ Uncategorized Transactions ({})", transactions.len());
    } else {
        println!("📝 Transactions ({})", transactions.len());
    }
    println!("   ─────────────────────────────────────────────────────────────");

    for tx in transactions {
        let amount_str = if tx.amount < 0.0 {
            format!("\x1b[31m{:.2}\x1b[0m", tx.amount.abs()) // Red for expenses
        } else {
            format!("\x1b[32m+{:.2}\x1b[0m", tx.amount) // Green for income
        };

        println!(
            "   [{:>3}] {} │ {:>12} │ {:<14} │ {}",
            tx.id,
            tx.date,
            amount_str,
            truncate(tx.display_label(), 14),
            truncate(&tx.description, 40)
        );
    }

    Ok(())
}
