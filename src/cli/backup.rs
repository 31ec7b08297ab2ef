use std::path::PathBuf;

use rusqlite::backup::Backup;

use crate::db::get_connection;
use crate::error::Result;
use crate::fmt::format_bytes;
use crate::settings::{db_path, get_data_dir};

fn default_dest() -> Result<PathBuf> {
    let backups_dir = get_data_dir().join("backups");
    std::fs::create_dir_all(&backups_dir)?;
    let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    Ok(backups_dir.join(format!("penny-{stamp}.db")))
}

pub fn run(output: Option<String>) -> Result<()> {
    let conn = get_connection(&db_path())?;
    let dest_path = match output {
        Some(p) => PathBuf::from(p),
        None => default_dest()?,
    };

    let mut dest_conn = rusqlite::Connection::open(&dest_path)?;
    Backup::new(&conn, &mut dest_conn)?
        .run_to_completion(100, std::time::Duration::from_millis(10), None)?;

    let size = std::fs::metadata(&dest_path)?.len();
    println!(
        "Backup saved to {} ({})",
        dest_path.display(),
        format_bytes(size)
    );
    Ok(())
}
