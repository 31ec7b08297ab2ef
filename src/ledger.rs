use rusqlite::Connection;

use crate::error::{PennyError, Result};
use crate::models::{Balance, NewTransaction, Transaction};
use crate::store;

pub fn compute_balance(conn: &Connection) -> Result<Balance> {
    let mut stmt =
        conn.prepare("SELECT kind, COALESCE(sum(value), 0) FROM transactions GROUP BY kind")?;
    let totals = stmt
        .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, f64>(1)?)))?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut balance = Balance::default();
    for (kind, total) in totals {
        match kind.as_str() {
            "income" => balance.income = total,
            "outcome" => balance.outcome = total,
            _ => {}
        }
    }
    balance.total = balance.income - balance.outcome;
    Ok(balance)
}

/// Record a single transaction. The category is looked up by title and lazily
/// created if missing, the same reconciliation the importer does in batch.
/// An outcome larger than the current total balance is rejected.
pub fn record_transaction(
    conn: &mut Connection,
    title: &str,
    kind: &str,
    value: f64,
    category: Option<&str>,
) -> Result<Transaction> {
    if kind != "income" && kind != "outcome" {
        return Err(PennyError::InvalidKind(kind.to_string()));
    }
    if !value.is_finite() || value < 0.0 {
        return Err(PennyError::InvalidValue(value.to_string()));
    }
    if kind == "outcome" {
        let balance = compute_balance(conn)?;
        if value > balance.total {
            return Err(PennyError::InsufficientFunds {
                requested: value,
                available: balance.total,
            });
        }
    }

    let category_id = match category.map(str::trim) {
        Some(t) if !t.is_empty() => Some(store::find_or_create_category(conn, t)?.id),
        _ => None,
    };

    let mut created = store::insert_transactions(
        conn,
        &[NewTransaction {
            title: title.to_string(),
            kind: kind.to_string(),
            value: value.to_string(),
            category_id,
        }],
    )?;
    Ok(created.remove(0))
}
