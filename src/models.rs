#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i64,
    pub title: String,
}

#[derive(Debug, Clone)]
pub struct Transaction {
    pub id: i64,
    pub title: String,
    pub kind: String,
    pub value: f64,
    pub category_id: Option<i64>,
}

/// One valid data line from an import file. `value` stays raw text here;
/// the store converts it when the row is persisted.
#[derive(Debug, Clone)]
pub struct CsvRow {
    pub title: String,
    pub kind: String,
    pub value: String,
    pub category: String,
}

/// A transaction ready to persist, category already resolved (or absent).
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub title: String,
    pub kind: String,
    pub value: String,
    pub category_id: Option<i64>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Balance {
    pub income: f64,
    pub outcome: f64,
    pub total: f64,
}
