//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use std::io::Write;

use clap::Parser;
use tempfile::NamedTempFile;

use crate::cli::{Cli, Commands};
use crate::commands::{self, truncate};

const STATEMENT: &str = "Date,Description,Amount
2024-03-01,UPI-ZOMATO,-350
2024-03-02,SALARY CREDIT,90000
2024-03-03,UPI-RANDOM PAYEE,-120
2024-03-04,NETFLIX,-649";

fn write_statement(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

// ========== Statement Loading ==========

#[test]
fn test_load_statement() {
    let file = write_statement(STATEMENT);
    let store = commands::load_statement(file.path()).unwrap();
    assert_eq!(store.len().unwrap(), 4);

    let other = store.list_uncategorized().unwrap();
    assert_eq!(other.len(), 2);
}

#[test]
fn test_load_statement_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = commands::load_statement(&dir.path().join("missing.csv")).unwrap_err();
    assert!(err.to_string().contains("Failed to open"));
}

#[test]
fn test_load_statement_invalid_columns() {
    let file = write_statement("Posted,Memo\n2024-01-01,X");
    let err = commands::load_statement(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to process"));
    let cause = format!("{:#}", err);
    assert!(cause.contains("Amount"));
}

// ========== Commands ==========

#[test]
fn test_cmd_transactions_list() {
    let file = write_statement(STATEMENT);
    let store = commands::load_statement(file.path()).unwrap();
    assert!(commands::cmd_transactions_list(&store, false, false).is_ok());
    assert!(commands::cmd_transactions_list(&store, true, false).is_ok());
    assert!(commands::cmd_transactions_list(&store, false, true).is_ok());
}

#[test]
fn test_cmd_summary() {
    let file = write_statement(STATEMENT);
    let store = commands::load_statement(file.path()).unwrap();
    assert!(commands::cmd_summary(&store, false).is_ok());
    assert!(commands::cmd_summary(&store, true).is_ok());
}

#[test]
fn test_cmd_summary_without_snapshot() {
    let store = tally_core::TransactionStore::new();
    assert!(commands::cmd_summary(&store, false).is_err());
}

#[test]
fn test_cmd_categorize_and_categories() {
    assert!(commands::cmd_categorize("UPI-SWIGGY").is_ok());
    assert!(commands::cmd_categories().is_ok());
}

// ========== Argument Parsing ==========

#[test]
fn test_parse_serve_defaults() {
    let cli = Cli::try_parse_from(["tally", "serve"]).unwrap();
    match cli.command {
        Commands::Serve { port, host, .. } => {
            assert_eq!(port, 5001);
            assert_eq!(host, "127.0.0.1");
        }
        _ => panic!("expected serve"),
    }
}

#[test]
fn test_parse_summary() {
    let cli = Cli::try_parse_from(["tally", "-v", "summary", "--file", "stmt.csv", "--json"])
        .unwrap();
    assert!(cli.verbose);
    match cli.command {
        Commands::Summary { file, json } => {
            assert_eq!(file.to_str(), Some("stmt.csv"));
            assert!(json);
        }
        _ => panic!("expected summary"),
    }
}

#[test]
fn test_parse_transactions_requires_file() {
    assert!(Cli::try_parse_from(["tally", "transactions"]).is_err());
}

// ========== Helpers ==========

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("a long description here", 10), "a long ...");
    assert_eq!(truncate("ÉPICERIE MARCHÉ", 8), "ÉPICE...");
}
