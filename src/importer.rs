use std::collections::HashSet;
use std::path::Path;

use rusqlite::Connection;

use crate::error::Result;
use crate::models::{CsvRow, NewTransaction, Transaction};
use crate::store;

// ---------------------------------------------------------------------------
// CSV reading
// ---------------------------------------------------------------------------

/// Read the valid data rows of an import file: `title,kind,value,category`.
/// The first line is a header and never data. Fields are trimmed; a row
/// missing title, kind, or value after trimming is dropped without comment.
pub fn read_rows(file_path: &Path) -> Result<Vec<CsvRow>> {
    let file = std::fs::File::open(file_path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(std::io::BufReader::new(file));

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let title = record.get(0).unwrap_or("").trim();
        let kind = record.get(1).unwrap_or("").trim();
        let value = record.get(2).unwrap_or("").trim();
        let category = record.get(3).unwrap_or("").trim();
        if title.is_empty() || kind.is_empty() || value.is_empty() {
            continue;
        }
        rows.push(CsvRow {
            title: title.to_string(),
            kind: kind.to_string(),
            value: value.to_string(),
            category: category.to_string(),
        });
    }
    Ok(rows)
}

// ---------------------------------------------------------------------------
// import_file
// ---------------------------------------------------------------------------

/// Import a CSV file of transactions: reconcile category titles against the
/// store (batch lookup, batch-create the missing ones), bulk-insert the
/// transactions, then delete the source file.
///
/// Returns the created transactions with their generated ids. Any IO or store
/// failure propagates as-is; steps already completed are not rolled back, and
/// a deletion failure surfaces even though the records are already persisted.
pub fn import_file(conn: &mut Connection, file_path: &Path) -> Result<Vec<Transaction>> {
    let rows = read_rows(file_path)?;

    // An empty fourth field means "no category named" and is not a candidate.
    let candidates: Vec<String> = rows
        .iter()
        .filter(|r| !r.category.is_empty())
        .map(|r| r.category.clone())
        .collect();

    let existing = store::categories_by_titles(conn, &candidates)?;
    let known: HashSet<&str> = existing.iter().map(|c| c.title.as_str()).collect();

    // Dedup in first-appearance order so generated ids are deterministic.
    let mut seen = HashSet::new();
    let mut missing = Vec::new();
    for title in &candidates {
        if !known.contains(title.as_str()) && seen.insert(title.as_str()) {
            missing.push(title.clone());
        }
    }

    let mut pool = store::insert_categories(conn, &missing)?;
    pool.extend(existing);

    let new_rows: Vec<NewTransaction> = rows
        .iter()
        .map(|row| NewTransaction {
            title: row.title.clone(),
            kind: row.kind.clone(),
            value: row.value.clone(),
            category_id: pool.iter().find(|c| c.title == row.category).map(|c| c.id),
        })
        .collect();

    let created = store::insert_transactions(conn, &new_rows)?;

    std::fs::remove_file(file_path)?;

    Ok(created)
}
