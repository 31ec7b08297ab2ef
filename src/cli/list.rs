use comfy_table::{Cell, Table};

use crate::db::get_connection;
use crate::error::{PennyError, Result};
use crate::fmt::money;
use crate::settings::db_path;
use crate::store;

pub fn run(month: Option<&str>, category: Option<&str>) -> Result<()> {
    if let Some(m) = month {
        chrono::NaiveDate::parse_from_str(&format!("{m}-01"), "%Y-%m-%d")
            .map_err(|_| PennyError::InvalidMonth(m.to_string()))?;
    }

    let conn = get_connection(&db_path())?;
    let rows = store::register(&conn, month, category)?;

    let mut table = Table::new();
    table.set_header(vec!["ID", "Title", "Kind", "Value", "Category", "Recorded"]);
    for row in &rows {
        table.add_row(vec![
            Cell::new(row.id),
            Cell::new(&row.title),
            Cell::new(&row.kind),
            Cell::new(money(row.value)),
            Cell::new(row.category.clone().unwrap_or_default()),
            Cell::new(&row.created_at),
        ]);
    }
    println!("Transactions\n{table}");
    println!("{} transactions", rows.len());
    Ok(())
}
