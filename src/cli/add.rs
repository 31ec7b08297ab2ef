use colored::Colorize;

use crate::db::get_connection;
use crate::error::Result;
use crate::fmt::money;
use crate::ledger::record_transaction;
use crate::settings::db_path;

pub fn run(title: &str, kind: &str, value: f64, category: Option<&str>) -> Result<()> {
    let mut conn = get_connection(&db_path())?;

    let txn = record_transaction(&mut conn, title, kind, value, category)?;

    let kind_label = if txn.kind == "income" {
        txn.kind.green()
    } else {
        txn.kind.red()
    };
    println!(
        "Recorded {kind_label} '{}' for {} (id {})",
        txn.title,
        money(txn.value),
        txn.id
    );
    Ok(())
}
