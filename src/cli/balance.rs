use colored::Colorize;

use crate::db::get_connection;
use crate::error::Result;
use crate::fmt::money;
use crate::ledger::compute_balance;
use crate::settings::db_path;

pub fn run() -> Result<()> {
    let conn = get_connection(&db_path())?;
    let balance = compute_balance(&conn)?;

    println!("Income:   {}", money(balance.income).green());
    println!("Outcome:  {}", money(balance.outcome).red());
    println!("Total:    {}", money(balance.total).bold());
    Ok(())
}
