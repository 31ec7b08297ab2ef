use std::path::Path;

use crate::db::get_connection;
use crate::error::Result;
use crate::importer::import_file;
use crate::settings::db_path;

pub fn run(file: &str) -> Result<()> {
    let mut conn = get_connection(&db_path())?;

    let created = import_file(&mut conn, Path::new(file))?;

    println!("Imported {} transactions from {file}", created.len());
    Ok(())
}
