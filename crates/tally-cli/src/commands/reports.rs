//! Report command implementations

use anyhow::Result;
use tally_core::TransactionStore;

use super::truncate;

pub fn cmd_summary(store: &TransactionStore, json: bool) -> Result<()> {
    let summary = store.expense_summary()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    if summary.is_empty() {
        println!("No expenses in this statement.");
        return Ok(());
    }

    let total: f64 = summary.iter().map(|s| s.amount).sum();

    println!();
    println!("💸 Spending by Category");
    println!("   ─────────────────────────────────────────────");

    for row in &summary {
        let pct = if total > 0.0 {
            row.amount / total * 100.0
        } else {
            0.0
        };
        println!(
            "   {:<20} {:>12.2} {:>5.1}%  ({} txns)",
            truncate(&row.category, 20),
            row.amount,
            pct,
            row.transaction_count
        );
    }

    println!("   ─────────────────────────────────────────────");
    println!("   {:<20} {:>12.2}", "Total", total);

    Ok(())
}
