use crate::db::get_connection;
use crate::error::Result;
use crate::settings::db_path;
use crate::store;

pub fn run(id: i64) -> Result<()> {
    let conn = get_connection(&db_path())?;
    store::delete_transaction(&conn, id)?;
    println!("Deleted transaction {id}");
    Ok(())
}
