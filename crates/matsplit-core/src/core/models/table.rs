use super::value::Value;
use std::collections::HashMap;

/// A schema-uniform tabular dataset held in memory.
///
/// The column schema is ordered, and every row is exactly as wide as the
/// schema. Codecs and the split engine rely on that invariant: cells are
/// addressed by column index, and partitions are materialized by row index.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataTable {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl DataTable {
    /// Creates an empty table with the given column schema.
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Number of rows in the table.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Resolves a column name to its index in the schema.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Iterates over one column of the table, row by row.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &Value> {
        self.rows.iter().map(move |row| &row[index])
    }

    /// Appends a row. The row must match the schema width.
    pub fn push_row(&mut self, row: Vec<Value>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    /// Keeps only the rows the predicate accepts and returns how many were
    /// removed.
    pub fn retain_rows<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&[Value]) -> bool,
    {
        let before = self.rows.len();
        self.rows.retain(|row| predicate(row));
        before - self.rows.len()
    }

    /// Builds a new table with the same schema containing the given rows, in
    /// the given order.
    pub fn select_rows(&self, indices: &[usize]) -> DataTable {
        DataTable {
            columns: self.columns.clone(),
            rows: indices.iter().map(|&i| self.rows[i].clone()).collect(),
        }
    }
}

/// Accumulates records with potentially heterogeneous schemas into a
/// [`DataTable`].
///
/// Columns are interned in first-appearance order. When a record introduces a
/// new column, all previously collected rows are backfilled with
/// [`Value::Null`]; when a record omits a known column, that cell stays null.
/// This mirrors how a dataframe load unions record schemas.
#[derive(Debug, Default)]
pub struct DataTableBuilder {
    columns: Vec<String>,
    index: HashMap<String, usize>,
    rows: Vec<Vec<Value>>,
}

impl DataTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one record. Duplicate field names within a record keep the last
    /// value, matching JSON object semantics.
    pub fn push_record(&mut self, fields: Vec<(String, Value)>) {
        let mut row = vec![Value::Null; self.columns.len()];
        for (name, value) in fields {
            let idx = match self.index.get(&name) {
                Some(&idx) => idx,
                None => {
                    let idx = self.columns.len();
                    self.columns.push(name.clone());
                    self.index.insert(name, idx);
                    for existing in &mut self.rows {
                        existing.push(Value::Null);
                    }
                    row.push(Value::Null);
                    idx
                }
            };
            row[idx] = value;
        }
        self.rows.push(row);
    }

    pub fn build(self) -> DataTable {
        DataTable {
            columns: self.columns,
            rows: self.rows,
        }
    }
}
