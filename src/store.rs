use rusqlite::{params, params_from_iter, Connection};

use crate::error::{PennyError, Result};
use crate::models::{Category, NewTransaction, Transaction};

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// Batch lookup: one query matching any of the given titles, not one per title.
pub fn categories_by_titles(conn: &Connection, titles: &[String]) -> Result<Vec<Category>> {
    if titles.is_empty() {
        return Ok(Vec::new());
    }
    let placeholders = vec!["?"; titles.len()].join(", ");
    let sql = format!("SELECT id, title FROM categories WHERE title IN ({placeholders})");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params_from_iter(titles.iter()), |row| {
            Ok(Category {
                id: row.get(0)?,
                title: row.get(1)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(rows)
}

/// Insert one category per title, all inside a single SQLite transaction.
/// Callers pass deduplicated titles; a repeat would trip the UNIQUE constraint
/// and roll the whole batch back.
pub fn insert_categories(conn: &mut Connection, titles: &[String]) -> Result<Vec<Category>> {
    let tx = conn.transaction()?;
    let mut created = Vec::with_capacity(titles.len());
    {
        let mut stmt = tx.prepare("INSERT INTO categories (title) VALUES (?1)")?;
        for title in titles {
            stmt.execute([title])?;
            created.push(Category {
                id: tx.last_insert_rowid(),
                title: title.clone(),
            });
        }
    }
    tx.commit()?;
    Ok(created)
}

/// Single-row flavor of the import reconciliation: reuse the row matching
/// `title` or lazily create it.
pub fn find_or_create_category(conn: &mut Connection, title: &str) -> Result<Category> {
    let existing = conn
        .query_row("SELECT id, title FROM categories WHERE title = ?1", [title], |row| {
            Ok(Category {
                id: row.get(0)?,
                title: row.get(1)?,
            })
        });
    match existing {
        Ok(cat) => Ok(cat),
        Err(rusqlite::Error::QueryReturnedNoRows) => {
            conn.execute("INSERT INTO categories (title) VALUES (?1)", [title])?;
            Ok(Category {
                id: conn.last_insert_rowid(),
                title: title.to_string(),
            })
        }
        Err(e) => Err(e.into()),
    }
}

/// All categories with how many transactions reference each.
pub fn categories_with_counts(conn: &Connection) -> Result<Vec<(Category, i64)>> {
    let mut stmt = conn.prepare(
        "SELECT c.id, c.title, count(t.id) FROM categories c \
         LEFT JOIN transactions t ON t.category_id = c.id \
         GROUP BY c.id ORDER BY c.title",
    )?;
    let rows = stmt
        .query_map([], |row| {
            Ok((
                Category {
                    id: row.get(0)?,
                    title: row.get(1)?,
                },
                row.get(2)?,
            ))
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(rows)
}

// ---------------------------------------------------------------------------
// Transactions
// ---------------------------------------------------------------------------

/// Convert a raw CSV value field to a number. Tolerates thousands separators
/// and a currency symbol; anything else becomes 0.0 rather than an error.
pub fn parse_value(raw: &str) -> f64 {
    raw.replace([',', '$'], "").trim().parse().unwrap_or(0.0)
}

/// Persist the batch in a single SQLite transaction and return the created
/// records. Ids ARE populated (from `last_insert_rowid`, no re-read needed);
/// values are the submitted text converted by [`parse_value`].
pub fn insert_transactions(conn: &mut Connection, rows: &[NewTransaction]) -> Result<Vec<Transaction>> {
    let tx = conn.transaction()?;
    let mut created = Vec::with_capacity(rows.len());
    {
        let mut stmt = tx.prepare(
            "INSERT INTO transactions (title, kind, value, category_id) VALUES (?1, ?2, ?3, ?4)",
        )?;
        for row in rows {
            let value = parse_value(&row.value);
            stmt.execute(params![row.title, row.kind, value, row.category_id])?;
            created.push(Transaction {
                id: tx.last_insert_rowid(),
                title: row.title.clone(),
                kind: row.kind.clone(),
                value,
                category_id: row.category_id,
            });
        }
    }
    tx.commit()?;
    Ok(created)
}

pub fn delete_transaction(conn: &Connection, id: i64) -> Result<()> {
    let affected = conn.execute("DELETE FROM transactions WHERE id = ?1", [id])?;
    if affected == 0 {
        return Err(PennyError::UnknownTransaction(id));
    }
    Ok(())
}

/// A register line as shown by `penny list`.
#[derive(Debug, Clone)]
pub struct RegisterRow {
    pub id: i64,
    pub title: String,
    pub kind: String,
    pub value: f64,
    pub category: Option<String>,
    pub created_at: String,
}

pub fn register(
    conn: &Connection,
    month: Option<&str>,
    category: Option<&str>,
) -> Result<Vec<RegisterRow>> {
    let mut sql = String::from(
        "SELECT t.id, t.title, t.kind, t.value, c.title, t.created_at \
         FROM transactions t LEFT JOIN categories c ON t.category_id = c.id",
    );
    let mut clauses = Vec::new();
    let mut binds: Vec<String> = Vec::new();
    if let Some(m) = month {
        clauses.push(format!("t.created_at LIKE ?{}", binds.len() + 1));
        binds.push(format!("{m}%"));
    }
    if let Some(c) = category {
        clauses.push(format!("c.title = ?{}", binds.len() + 1));
        binds.push(c.to_string());
    }
    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }
    sql.push_str(" ORDER BY t.id");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params_from_iter(binds.iter()), |row| {
            Ok(RegisterRow {
                id: row.get(0)?,
                title: row.get(1)?,
                kind: row.get(2)?,
                value: row.get(3)?,
                category: row.get(4)?,
                created_at: row.get(5)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{get_connection, init_db};

    fn test_db() -> (tempfile::TempDir, Connection) {
        let dir = tempfile::tempdir().unwrap();
        let conn = get_connection(&dir.path().join("test.db")).unwrap();
        init_db(&conn).unwrap();
        (dir, conn)
    }

    fn titles(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_categories_by_titles_empty_input() {
        let (_dir, conn) = test_db();
        assert!(categories_by_titles(&conn, &[]).unwrap().is_empty());
    }

    #[test]
    fn test_categories_by_titles_matches_only_known() {
        let (_dir, mut conn) = test_db();
        insert_categories(&mut conn, &titles(&["Food", "Work"])).unwrap();
        let found = categories_by_titles(&conn, &titles(&["Food", "Travel"])).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Food");
    }

    #[test]
    fn test_insert_categories_returns_ids() {
        let (_dir, mut conn) = test_db();
        let created = insert_categories(&mut conn, &titles(&["Food", "Work"])).unwrap();
        assert_eq!(created.len(), 2);
        assert!(created[0].id > 0);
        assert_ne!(created[0].id, created[1].id);
    }

    #[test]
    fn test_insert_categories_batch_is_atomic() {
        let (_dir, mut conn) = test_db();
        insert_categories(&mut conn, &titles(&["Food"])).unwrap();
        // Second title collides; the whole batch must roll back.
        let result = insert_categories(&mut conn, &titles(&["Travel", "Food"]));
        assert!(result.is_err());
        let count: i64 = conn
            .query_row("SELECT count(*) FROM categories", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_find_or_create_category_reuses_existing() {
        let (_dir, mut conn) = test_db();
        let first = find_or_create_category(&mut conn, "Food").unwrap();
        let second = find_or_create_category(&mut conn, "Food").unwrap();
        assert_eq!(first, second);
        let count: i64 = conn
            .query_row("SELECT count(*) FROM categories", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("150.00"), 150.0);
        assert_eq!(parse_value(" 3,000.50 "), 3000.5);
        assert_eq!(parse_value("$42"), 42.0);
        assert_eq!(parse_value("not-a-number"), 0.0);
    }

    #[test]
    fn test_insert_transactions_populates_ids_and_values() {
        let (_dir, mut conn) = test_db();
        let cat = find_or_create_category(&mut conn, "Food").unwrap();
        let created = insert_transactions(
            &mut conn,
            &[
                NewTransaction {
                    title: "Groceries".to_string(),
                    kind: "outcome".to_string(),
                    value: "150.00".to_string(),
                    category_id: Some(cat.id),
                },
                NewTransaction {
                    title: "Salary".to_string(),
                    kind: "income".to_string(),
                    value: "3,000.00".to_string(),
                    category_id: None,
                },
            ],
        )
        .unwrap();
        assert_eq!(created.len(), 2);
        assert!(created.iter().all(|t| t.id > 0));
        assert_eq!(created[1].value, 3000.0);
        let stored: i64 = conn
            .query_row("SELECT count(*) FROM transactions", [], |r| r.get(0))
            .unwrap();
        assert_eq!(stored, 2);
    }

    #[test]
    fn test_insert_transactions_rejects_bad_kind() {
        let (_dir, mut conn) = test_db();
        let result = insert_transactions(
            &mut conn,
            &[NewTransaction {
                title: "x".to_string(),
                kind: "transfer".to_string(),
                value: "1".to_string(),
                category_id: None,
            }],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_delete_transaction_unknown_id() {
        let (_dir, conn) = test_db();
        assert!(matches!(
            delete_transaction(&conn, 99),
            Err(PennyError::UnknownTransaction(99))
        ));
    }

    #[test]
    fn test_register_filters_by_category() {
        let (_dir, mut conn) = test_db();
        let food = find_or_create_category(&mut conn, "Food").unwrap();
        let work = find_or_create_category(&mut conn, "Work").unwrap();
        insert_transactions(
            &mut conn,
            &[
                NewTransaction {
                    title: "Groceries".to_string(),
                    kind: "outcome".to_string(),
                    value: "150".to_string(),
                    category_id: Some(food.id),
                },
                NewTransaction {
                    title: "Salary".to_string(),
                    kind: "income".to_string(),
                    value: "3000".to_string(),
                    category_id: Some(work.id),
                },
            ],
        )
        .unwrap();
        let rows = register(&conn, None, Some("Food")).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "Groceries");
        assert_eq!(rows[0].category.as_deref(), Some("Food"));
    }

    #[test]
    fn test_categories_with_counts() {
        let (_dir, mut conn) = test_db();
        let food = find_or_create_category(&mut conn, "Food").unwrap();
        find_or_create_category(&mut conn, "Work").unwrap();
        insert_transactions(
            &mut conn,
            &[NewTransaction {
                title: "Groceries".to_string(),
                kind: "outcome".to_string(),
                value: "150".to_string(),
                category_id: Some(food.id),
            }],
        )
        .unwrap();
        let rows = categories_with_counts(&conn).unwrap();
        assert_eq!(rows.len(), 2);
        let food_row = rows.iter().find(|(c, _)| c.title == "Food").unwrap();
        assert_eq!(food_row.1, 1);
    }
}
