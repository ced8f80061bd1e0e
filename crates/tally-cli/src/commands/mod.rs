//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `statement` - Shared utilities (load_statement) and categorize/categories
//! - `reports` - Expense summary
//! - `serve` - Web server command
//! - `transactions` - Transaction listing

pub mod reports;
pub mod serve;
pub mod statement;
pub mod transactions;

// Re-export command functions for main.rs
pub use reports::*;
pub use serve::*;
pub use statement::*;
pub use transactions::*;

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
