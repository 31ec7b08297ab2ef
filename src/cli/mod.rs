pub mod add;
pub mod backup;
pub mod balance;
pub mod categories;
pub mod delete;
pub mod import;
pub mod init;
pub mod list;
pub mod status;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "penny", about = "Personal income/outcome ledger CLI with batch CSV import.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up Penny: choose a data directory and initialize the database.
    Init {
        /// Path for Penny data (default: ~/Documents/penny)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
    },
    /// Import a CSV file of transactions: title,kind,value,category.
    Import {
        /// Path to the CSV file; deleted after a successful import
        file: String,
    },
    /// Record a single transaction.
    Add {
        /// Transaction title, e.g. 'Groceries'
        title: String,
        /// Transaction kind: income or outcome
        #[arg(long)]
        kind: String,
        /// Amount (non-negative)
        #[arg(long)]
        value: f64,
        /// Category title; created on first use
        #[arg(long)]
        category: Option<String>,
    },
    /// Show the transaction register.
    List {
        /// Month filter: YYYY-MM
        #[arg(long)]
        month: Option<String>,
        /// Filter by category title
        #[arg(long)]
        category: Option<String>,
    },
    /// Show income, outcome, and net total.
    Balance,
    /// List categories with transaction counts.
    Categories,
    /// Delete a transaction by id.
    Delete {
        /// Transaction id (shown in `penny list`)
        id: i64,
    },
    /// Back up the database.
    Backup {
        /// Output path (default: <data_dir>/backups/penny-YYYYMMDD-HHMMSS.db)
        #[arg(long)]
        output: Option<String>,
    },
    /// Show current database and summary statistics.
    Status,
}
