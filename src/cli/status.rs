use crate::db::get_connection;
use crate::error::Result;
use crate::fmt::{format_bytes, money};
use crate::ledger::compute_balance;
use crate::settings::load_settings;

pub fn run() -> Result<()> {
    let settings = load_settings();
    let data_dir = std::path::PathBuf::from(&settings.data_dir);
    let db_path = data_dir.join("penny.db");

    println!("Data dir:   {}", data_dir.display());
    println!("Database:   {}", db_path.display());

    if db_path.exists() {
        let size = std::fs::metadata(&db_path)?.len();
        println!("DB size:    {}", format_bytes(size));

        let conn = get_connection(&db_path)?;
        let categories: i64 = conn.query_row("SELECT count(*) FROM categories", [], |r| r.get(0))?;
        let transactions: i64 =
            conn.query_row("SELECT count(*) FROM transactions", [], |r| r.get(0))?;
        let balance = compute_balance(&conn)?;

        println!();
        println!("Categories:    {categories}");
        println!("Transactions:  {transactions}");
        println!("Balance:       {}", money(balance.total));
    } else {
        println!();
        println!("Database not found. Run `penny init` to set up.");
    }

    Ok(())
}
