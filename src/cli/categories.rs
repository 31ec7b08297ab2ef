use comfy_table::{Cell, Table};

use crate::db::get_connection;
use crate::error::Result;
use crate::settings::db_path;
use crate::store;

pub fn run() -> Result<()> {
    let conn = get_connection(&db_path())?;
    let rows = store::categories_with_counts(&conn)?;

    let mut table = Table::new();
    table.set_header(vec!["ID", "Title", "Transactions"]);
    for (category, count) in rows {
        table.add_row(vec![
            Cell::new(category.id),
            Cell::new(category.title),
            Cell::new(count),
        ]);
    }
    println!("Categories\n{table}");
    Ok(())
}
